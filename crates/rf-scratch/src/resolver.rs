//! Reward resolution
//!
//! Resolution order is fixed:
//!
//! ```text
//! stake ──count rule──▶ running total ──horizontal──▶ ──vertical──▶ ──diagonal──▶
//!        (or stake)
//!                │
//!                ├─ no count match and total == stake ─▶ payout 0
//!                │
//!                └─ total × max(multiplier bonus) + Σ additive bonus ─▶ payout
//! ```

use serde::{Deserialize, Serialize};

use crate::detector::DetectedPatterns;
use crate::error::ScratchResult;
use crate::grid::Grid;
use crate::paytable::{PatternKind, PayTable, RewardAction, RewardRule, apply_action};

/// One reward rule applied to the running total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedReward {
    pub kind: PatternKind,
    pub rule: RewardRule,
    pub before: i64,
    pub after: i64,
}

/// Bonus cells found on a winning grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusSummary {
    /// Largest multiplier bonus, 1 when none
    pub multiplier: f64,
    /// Sum of every additive bonus cell
    pub additive: f64,
}

impl Default for BonusSummary {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            additive: 0.0,
        }
    }
}

/// Resolved payout with the steps that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub stake: i64,
    /// Pattern rewards in application order
    pub steps: Vec<AppliedReward>,
    /// Running total before bonuses
    pub running_total: i64,
    /// `None` when the play lost and bonuses were skipped
    pub bonus: Option<BonusSummary>,
    pub payout: i64,
}

impl Resolution {
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Resolve the payout for a stake
pub fn resolve(
    grid: &Grid,
    patterns: &DetectedPatterns,
    paytable: &PayTable,
    stake: i64,
) -> ScratchResult<i64> {
    resolve_detailed(grid, patterns, paytable, stake).map(|r| r.payout)
}

/// Resolve the payout and keep the intermediate steps
pub fn resolve_detailed(
    grid: &Grid,
    patterns: &DetectedPatterns,
    paytable: &PayTable,
    stake: i64,
) -> ScratchResult<Resolution> {
    let mut steps = Vec::new();

    // Count rule applies to the original stake
    let mut total = stake;
    if let Some(kind) = patterns.count {
        let rule = *paytable.rule_for(kind)?;
        total = rule.apply(stake)?;
        steps.push(AppliedReward {
            kind,
            rule,
            before: stake,
            after: total,
        });
    }

    // Line rules chain on the running total
    for kind in patterns.lines() {
        let rule = *paytable.rule_for(kind)?;
        let before = total;
        total = rule.apply(before)?;
        steps.push(AppliedReward {
            kind,
            rule,
            before,
            after: total,
        });
    }

    if patterns.count.is_none() && total == stake {
        return Ok(Resolution {
            stake,
            steps,
            running_total: total,
            bonus: None,
            payout: 0,
        });
    }

    let bonus = scan_bonuses(grid);
    let multiplied = apply_action(RewardAction::Multiply, bonus.multiplier, total)?;
    let payout = apply_action(RewardAction::Sum, bonus.additive, multiplied)?;

    Ok(Resolution {
        stake,
        steps,
        running_total: total,
        bonus: Some(bonus),
        payout,
    })
}

/// Max multiplier and summed additive bonus across every cell
pub fn scan_bonuses(grid: &Grid) -> BonusSummary {
    let mut summary = BonusSummary::default();
    let mut best_multiplier: Option<f64> = None;

    for effect in grid.cells().iter().filter_map(|s| s.bonus()) {
        match effect.action {
            RewardAction::Multiply => {
                let best = best_multiplier.get_or_insert(effect.amount);
                *best = best.max(effect.amount);
            }
            RewardAction::Sum => summary.additive += effect.amount,
        }
    }

    if let Some(m) = best_multiplier {
        summary.multiplier = m;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::detect;
    use crate::error::ScratchError;
    use crate::paytable::MAX_STAKE;
    use crate::symbols::Symbol::{self, *};

    fn grid(rows: Vec<Vec<Symbol>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn payout(rows: Vec<Vec<Symbol>>, stake: i64) -> i64 {
        let g = grid(rows);
        let p = detect(&g);
        resolve(&g, &p, &PayTable::standard(), stake).unwrap()
    }

    #[test]
    fn test_no_win_pays_zero() {
        assert_eq!(payout(vec![vec![A, B, C], vec![D, E, F], vec![A, B, C]], 100), 0);
    }

    #[test]
    fn test_bonuses_ignored_on_loss() {
        let rows = vec![
            vec![X10, X5, P500],
            vec![P1000, B, C],
            vec![D, E, F],
        ];
        assert_eq!(payout(rows, 100), 0);
    }

    #[test]
    fn test_same_3_times_one_pays_stake() {
        let rows = vec![vec![A, A, C], vec![B, A, D], vec![E, F, Blank]];
        assert_eq!(payout(rows, 100), 100);
    }

    #[test]
    fn test_count_then_horizontal() {
        let rows = vec![vec![A, A, A], vec![A, A, A], vec![B, C, D]];
        assert_eq!(payout(rows, 100), 100 * 5 * 2);
    }

    #[test]
    fn test_all_lines_chain() {
        let rows = vec![vec![A; 3], vec![A; 3], vec![A; 3]];
        assert_eq!(payout(rows, 100), 100 * 50 * 2 * 2 * 5);
    }

    #[test]
    fn test_bonus_composition() {
        let rows = vec![
            vec![A, A, A],
            vec![X10, X5, P1000],
            vec![A, A, A],
        ];
        assert_eq!(payout(rows, 100), 100 * 5 * 2 * 10 + 1000);
    }

    #[test]
    fn test_multiplier_is_max_not_product() {
        let g = grid(vec![vec![X5, X10], vec![A, B]]);
        assert_eq!(scan_bonuses(&g).multiplier, 10.0);
    }

    #[test]
    fn test_additive_is_sum_not_max() {
        let g = grid(vec![vec![P500, P500], vec![A, B]]);
        let bonus = scan_bonuses(&g);
        assert_eq!(bonus.additive, 1000.0);
        assert_eq!(bonus.multiplier, 1.0);
    }

    #[test]
    fn test_line_only_win() {
        let rows = vec![vec![A, B, C], vec![D, A, F], vec![B, C, A]];
        assert_eq!(payout(rows, 100), 500);
    }

    #[test]
    fn test_sum_rules_and_rounding() {
        let g = grid(vec![vec![A, A, A], vec![B, C, D], vec![E, F, B]]);
        let p = detect(&g);
        let table = PayTable::new()
            .with_rule(PatternKind::Same3, RewardRule::multiply(1.25))
            .with_rule(PatternKind::Horizontal, RewardRule::sum(10.5));

        let r = resolve_detailed(&g, &p, &table, 10).unwrap();
        // 10 × 1.25 = 12.5 → 13, 13 + 10.5 = 23.5 → 24
        assert_eq!(r.steps[0].after, 13);
        assert_eq!(r.steps[1].after, 24);
        assert_eq!(r.payout, 24);
    }

    #[test]
    fn test_line_rule_leaving_stake_unchanged_is_loss() {
        let g = grid(vec![vec![A, A], vec![B, C]]);
        let p = detect(&g);
        let table = PayTable::new()
            .with_rule(PatternKind::Horizontal, RewardRule::multiply(1.0));
        let r = resolve_detailed(&g, &p, &table, 100).unwrap();
        assert_eq!(r.payout, 0);
        assert!(r.bonus.is_none());
        assert_eq!(r.steps.len(), 1);
    }

    #[test]
    fn test_missing_rule_is_fatal() {
        let g = grid(vec![vec![A, A, A], vec![B, C, D], vec![E, F, B]]);
        let p = detect(&g);
        let table = PayTable::new().with_rule(PatternKind::Same3, RewardRule::multiply(1.0));
        let err = resolve(&g, &p, &table, 100).unwrap_err();
        assert!(matches!(
            err,
            ScratchError::MissingRewardRule {
                kind: PatternKind::Horizontal
            }
        ));
    }

    #[test]
    fn test_large_stake_pays_exactly() {
        let stake = MAX_STAKE + 1;
        let rows = vec![vec![A, A, C], vec![B, A, D], vec![E, F, Blank]];
        assert_eq!(payout(rows, stake), stake);
    }

    #[test]
    fn test_overflowing_payout_is_error() {
        let g = grid(vec![vec![A; 3], vec![A; 3], vec![A; 3]]);
        let p = detect(&g);
        let err = resolve(&g, &p, &PayTable::standard(), 100_000_000_000_000_000).unwrap_err();
        // ×50 fits, the first line ×2 does not
        assert!(matches!(
            err,
            ScratchError::PayoutOverflow {
                base: 5_000_000_000_000_000_000,
                ..
            }
        ));
    }

    #[test]
    fn test_undetected_patterns_need_no_rule() {
        let g = grid(vec![vec![A, B, C], vec![D, E, F], vec![A, B, C]]);
        let p = detect(&g);
        assert_eq!(resolve(&g, &p, &PayTable::new(), 100).unwrap(), 0);
    }
}
