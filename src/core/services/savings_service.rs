use crate::domain::SavingsGoal;

use super::{ServiceError, ServiceResult};

pub struct SavingsService;

impl SavingsService {
    /// Rejects goals the entry form would not accept.
    pub fn validate(goal: &SavingsGoal) -> ServiceResult<()> {
        if goal.name.trim().is_empty() {
            return Err(ServiceError::Invalid("savings goal name is required".into()));
        }
        if !(goal.target_amount > 0.0) {
            return Err(ServiceError::Invalid(
                "savings target amount must be positive".into(),
            ));
        }
        if goal.current_amount < 0.0 {
            return Err(ServiceError::Invalid(
                "saved amount cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Amount saved so far across every goal.
    pub fn total_saved(goals: &[SavingsGoal]) -> f64 {
        goals.iter().map(|g| g.current_amount).sum()
    }

    pub fn total_target(goals: &[SavingsGoal]) -> f64 {
        goals.iter().map(|g| g.target_amount).sum()
    }

    /// Mean of the per-goal progress percentages; zero when no goals exist.
    pub fn average_progress(goals: &[SavingsGoal]) -> f64 {
        if goals.is_empty() {
            return 0.0;
        }
        goals.iter().map(SavingsGoal::progress).sum::<f64>() / goals.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_progress_is_zero_for_empty_list() {
        assert_eq!(SavingsService::average_progress(&[]), 0.0);
    }

    #[test]
    fn average_progress_is_the_mean_of_goal_progress() {
        let goals = vec![
            SavingsGoal::new("A", 100.0).with_current_amount(50.0),
            SavingsGoal::new("B", 200.0).with_current_amount(200.0),
        ];
        assert_eq!(SavingsService::average_progress(&goals), 75.0);
    }

    #[test]
    fn validate_rejects_zero_target() {
        let goal = SavingsGoal::new("Trip", 0.0);
        assert!(SavingsService::validate(&goal).is_err());
    }
}
