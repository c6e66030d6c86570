use serde::{Deserialize, Serialize};

use crate::domain::{Debt, SavingsGoal, Transaction};

use super::{DebtService, SavingsService};

/// Headline totals shown on the dashboard stat cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_balance: f64,
    pub total_savings: f64,
    pub total_debt: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Reduces the live collections to the dashboard totals. Recomputed in
    /// full on every call; nothing is cached.
    pub fn totals(
        transactions: &[Transaction],
        savings: &[SavingsGoal],
        debts: &[Debt],
    ) -> PortfolioTotals {
        let total_income: f64 = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expenses: f64 = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        PortfolioTotals {
            total_income,
            total_expenses,
            total_balance: total_income - total_expenses,
            total_savings: SavingsService::total_saved(savings),
            total_debt: DebtService::total_remaining(debts),
        }
    }
}
