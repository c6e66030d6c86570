use serde::{Deserialize, Serialize};

use crate::domain::Debt;

use super::Strategy;

/// Above this APR the portfolio is treated as high interest.
const HIGH_INTEREST_RATE: f64 = 15.0;
/// Below this balance a debt counts as a quick win.
const LOW_BALANCE: f64 = 1000.0;

/// Outcome of the strategy heuristic; `strategy` is `None` when both
/// methods are equally viable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyRecommendation {
    pub strategy: Option<Strategy>,
    pub reason: String,
}

pub struct StrategyAdvisor;

impl StrategyAdvisor {
    /// Inspects the debt list with simple threshold rules: high-interest
    /// debts favor avalanche, small balances favor snowball.
    pub fn recommend(debts: &[Debt]) -> StrategyRecommendation {
        let has_high_interest = debts.iter().any(|d| d.interest_rate > HIGH_INTEREST_RATE);
        let has_low_balance = debts.iter().any(|d| d.amount < LOW_BALANCE);

        if has_high_interest {
            StrategyRecommendation {
                strategy: Some(Strategy::Avalanche),
                reason: "Avalanche method recommended due to high-interest debts.".into(),
            }
        } else if has_low_balance {
            StrategyRecommendation {
                strategy: Some(Strategy::Snowball),
                reason: "Snowball method recommended for quick wins and motivation.".into(),
            }
        } else {
            StrategyRecommendation {
                strategy: None,
                reason: "Both methods are viable. Choose based on your preference.".into(),
            }
        }
    }
}
