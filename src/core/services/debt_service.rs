use crate::domain::Debt;

use super::{ServiceError, ServiceResult};

/// Rates above this are called out as high interest across the app.
pub const HIGH_INTEREST_THRESHOLD: f64 = 10.0;

pub struct DebtService;

impl DebtService {
    /// Rejects records the entry form would not accept. The repayment
    /// planner relies on this contract and does not re-validate.
    pub fn validate(debt: &Debt) -> ServiceResult<()> {
        if debt.name.trim().is_empty() {
            return Err(ServiceError::Invalid("debt name is required".into()));
        }
        if !(debt.amount > 0.0) {
            return Err(ServiceError::Invalid("debt amount must be positive".into()));
        }
        if !(0.0..=100.0).contains(&debt.interest_rate) {
            return Err(ServiceError::Invalid(
                "interest rate must be between 0 and 100".into(),
            ));
        }
        if debt.min_payment < 0.0 {
            return Err(ServiceError::Invalid(
                "minimum payment cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Sum of original balances across the portfolio.
    pub fn total_debt(debts: &[Debt]) -> f64 {
        debts.iter().map(|d| d.amount).sum()
    }

    /// Outstanding balance still owed.
    pub fn total_remaining(debts: &[Debt]) -> f64 {
        debts.iter().map(|d| d.remaining_amount).sum()
    }

    /// Interest the whole portfolio accrues in one month.
    pub fn monthly_interest(debts: &[Debt]) -> f64 {
        debts.iter().map(Debt::monthly_interest).sum()
    }

    pub fn high_interest(debts: &[Debt]) -> Vec<&Debt> {
        debts
            .iter()
            .filter(|d| d.interest_rate > HIGH_INTEREST_THRESHOLD)
            .collect()
    }
}
