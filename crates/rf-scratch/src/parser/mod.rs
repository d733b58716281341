//! Config Parser — Load scratch card documents into `ScratchConfig`
//!
//! Documents are accepted as JSON or YAML. Every successful parse is
//! validated before it is returned, so the engine only ever sees a
//! well-formed configuration.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let parser = ConfigParser::new();
//! let config = parser.load("cards/classic.json")?;
//! ```

mod validator;

pub use validator::*;

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::config::ScratchConfig;
use crate::error::{ScratchError, ScratchResult};

/// Config Parser
#[derive(Debug, Clone, Default)]
pub struct ConfigParser {
    /// Validation limits
    pub limits: ParserLimits,
}

/// Parsing limits
#[derive(Debug, Clone)]
pub struct ParserLimits {
    pub max_rows: usize,
    pub max_columns: usize,
    pub max_reward_amount: f64,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_rows: 16,
            max_columns: 16,
            max_reward_amount: 1_000_000.0,
        }
    }
}

/// Document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> ScratchResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ScratchError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl ConfigParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parser with custom limits
    pub fn with_limits(limits: ParserLimits) -> Self {
        Self { limits }
    }

    /// Parse a JSON document
    pub fn parse_json(&self, json: &str) -> ScratchResult<ScratchConfig> {
        let config: ScratchConfig = serde_json::from_str(json)?;
        self.checked(config)
    }

    /// Parse a YAML document
    pub fn parse_yaml(&self, yaml: &str) -> ScratchResult<ScratchConfig> {
        let config: ScratchConfig = serde_yml::from_str(yaml)?;
        self.checked(config)
    }

    pub fn parse(&self, text: &str, format: ConfigFormat) -> ScratchResult<ScratchConfig> {
        match format {
            ConfigFormat::Json => self.parse_json(text),
            ConfigFormat::Yaml => self.parse_yaml(text),
        }
    }

    /// Read, parse and validate a config file
    pub fn load(&self, path: impl AsRef<Path>) -> ScratchResult<ScratchConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        debug!("Loading {:?} config from {}", format, path.display());
        self.parse(&text, format)
    }

    /// Validate a configuration against the parser limits
    pub fn validate(&self, config: &ScratchConfig) -> ScratchResult<()> {
        validate_config(config, &self.limits)
    }

    fn checked(&self, config: ScratchConfig) -> ScratchResult<ScratchConfig> {
        if let Err(e) = self.validate(&config) {
            warn!("Rejected scratch config: {}", e);
            return Err(e);
        }
        Ok(config)
    }
}
