//! Debt repayment planning: deterministic payoff schedules for a fixed set
//! of debts under a shared monthly budget.

pub mod advisor;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::domain::Debt;

/// Hard cap on simulated months (50 years). Payments at or below the monthly
/// interest accrual never converge, so the loop must be bounded.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Which debt gets paid down first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first; minimizes total interest paid.
    Avalanche,
    /// Smallest balance first; front-loads quick wins.
    Snowball,
}

impl Strategy {
    /// Short explanation shown next to the strategy toggle.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Avalanche => {
                "Pay off debts with the highest interest rates first. \
                 This saves the most money on interest."
            }
            Strategy::Snowball => {
                "Pay off debts with the smallest balances first. \
                 This provides quick wins and motivation."
            }
        }
    }
}

/// One debt's slice of the plan, in payoff priority order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtPlanEntry {
    pub debt_id: Uuid,
    pub name: String,
    pub interest_rate: f64,
    /// The debt's own minimum, plus the whole surplus if it is first in line.
    pub monthly_payment: f64,
    pub months_to_payoff: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    /// False when the balance did not reach zero within the month cap.
    pub converged: bool,
}

/// Full payoff schedule plus aggregate totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepaymentPlan {
    pub strategy: Strategy,
    pub monthly_budget: f64,
    pub entries: Vec<DebtPlanEntry>,
    pub total_interest: f64,
    pub total_paid: f64,
    /// Months until the slowest debt clears; the portfolio horizon.
    pub max_months: u32,
}

impl RepaymentPlan {
    fn empty(strategy: Strategy, monthly_budget: f64) -> Self {
        Self {
            strategy,
            monthly_budget,
            entries: Vec::new(),
            total_interest: 0.0,
            total_paid: 0.0,
            max_months: 0,
        }
    }
}

/// Computes a payoff schedule for `debts` under one monthly budget.
///
/// Priority order is fixed once up front (not re-sorted as balances shrink)
/// and the entire surplus above the summed minimum payments goes to the
/// top-priority debt for its whole amortization; budget freed when a debt
/// clears is not rolled over to the next one. Input debts are never mutated.
pub fn compute_plan(debts: &[Debt], strategy: Strategy, monthly_budget: f64) -> RepaymentPlan {
    let monthly_budget = coerce(monthly_budget);
    if debts.is_empty() {
        return RepaymentPlan::empty(strategy, monthly_budget);
    }

    let mut ordered: Vec<&Debt> = debts.iter().collect();
    // Vec::sort_by is stable, so equal keys keep their input order.
    match strategy {
        Strategy::Avalanche => {
            ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate))
        }
        Strategy::Snowball => ordered.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
    }

    let total_min_payments: f64 = debts.iter().map(|d| coerce(d.min_payment)).sum();
    let extra_payment = (monthly_budget - total_min_payments).max(0.0);

    let entries: Vec<DebtPlanEntry> = ordered
        .iter()
        .enumerate()
        .map(|(index, debt)| {
            let mut monthly_payment = coerce(debt.min_payment);
            if index == 0 {
                monthly_payment += extra_payment;
            }
            amortize(debt, monthly_payment)
        })
        .collect();

    let total_interest = entries.iter().map(|e| e.total_interest).sum();
    let total_paid = entries.iter().map(|e| e.total_paid).sum();
    let max_months = entries
        .iter()
        .map(|e| e.months_to_payoff)
        .max()
        .unwrap_or(0);

    RepaymentPlan {
        strategy,
        monthly_budget,
        entries,
        total_interest,
        total_paid,
        max_months,
    }
}

/// Simulates one debt month by month until the balance clears or the cap hits.
fn amortize(debt: &Debt, monthly_payment: f64) -> DebtPlanEntry {
    let monthly_rate = debt.interest_rate / 100.0 / 12.0;
    let mut remaining_balance = debt.amount;
    let mut months_to_payoff = 0u32;
    let mut total_interest = 0.0;

    while remaining_balance > 0.0 && months_to_payoff < MAX_PAYOFF_MONTHS {
        let interest = remaining_balance * monthly_rate;
        let principal = monthly_payment - interest;
        remaining_balance = (remaining_balance - principal).max(0.0);
        total_interest += interest;
        months_to_payoff += 1;
    }

    let converged = remaining_balance <= 0.0;
    if !converged {
        warn!(
            "debt `{}` does not amortize within {} months at {:.2}/month",
            debt.name, MAX_PAYOFF_MONTHS, monthly_payment
        );
    }

    DebtPlanEntry {
        debt_id: debt.id,
        name: debt.name.clone(),
        interest_rate: debt.interest_rate,
        monthly_payment,
        months_to_payoff,
        total_interest,
        total_paid: debt.amount + total_interest,
        converged,
    }
}

fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
