use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Identifiable, NamedEntity};

/// An outstanding debt with its repayment terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    /// Outstanding principal the repayment planner amortizes.
    pub amount: f64,
    pub remaining_amount: f64,
    /// Nominal annual percentage rate, 0-100.
    pub interest_rate: f64,
    #[serde(default)]
    pub min_payment: f64,
    #[serde(default)]
    pub status: DebtStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
}

impl Debt {
    pub fn new(name: impl Into<String>, amount: f64, interest_rate: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            remaining_amount: amount,
            interest_rate,
            min_payment: 0.0,
            status: DebtStatus::Active,
            due_date: None,
            notes: None,
            color: None,
            created_at: None,
        }
    }

    pub fn with_min_payment(mut self, min_payment: f64) -> Self {
        self.min_payment = min_payment;
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    /// Percentage of the original balance already paid down.
    pub fn progress(&self) -> f64 {
        if self.amount > 0.0 {
            ((self.amount - self.remaining_amount) / self.amount) * 100.0
        } else {
            0.0
        }
    }

    /// Interest this debt accrues in a single month at the current balance.
    pub fn monthly_interest(&self) -> f64 {
        self.amount * (self.interest_rate / 100.0) / 12.0
    }
}

impl Identifiable for Debt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Debt {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    #[default]
    Active,
    PaidOff,
}
