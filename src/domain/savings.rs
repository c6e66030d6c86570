use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Identifiable, NamedEntity};

/// A savings goal the user is contributing toward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            status: GoalStatus::Active,
            deadline: None,
            notes: None,
            color: None,
            created_at: None,
        }
    }

    pub fn with_current_amount(mut self, current_amount: f64) -> Self {
        self.current_amount = current_amount;
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    /// Percentage of the target reached; zero when no target is set.
    pub fn progress(&self) -> f64 {
        if self.target_amount > 0.0 {
            (self.current_amount / self.target_amount) * 100.0
        } else {
            0.0
        }
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_without_target() {
        let goal = SavingsGoal::new("Rainy day", 0.0).with_current_amount(50.0);
        assert_eq!(goal.progress(), 0.0);
    }

    #[test]
    fn progress_reports_percentage_of_target() {
        let goal = SavingsGoal::new("Vacation", 2000.0).with_current_amount(500.0);
        assert_eq!(goal.progress(), 25.0);
    }
}
