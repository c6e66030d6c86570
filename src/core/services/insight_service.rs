use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Debt, SavingsGoal, Transaction};

use super::{AnalyticsService, DebtService, SummaryService};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Info,
    Warning,
    Critical,
}

/// A single heuristic observation about the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// An actionable next step derived from the same collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

pub struct InsightService;

impl InsightService {
    /// Runs every insight rule against the current collections. Rules are
    /// plain thresholds and the output order is fixed, so identical inputs
    /// always produce the same list.
    pub fn insights(
        transactions: &[Transaction],
        savings: &[SavingsGoal],
        debts: &[Debt],
        reference: NaiveDate,
    ) -> Vec<Insight> {
        let totals = SummaryService::totals(transactions, savings, debts);
        let analytics = AnalyticsService::for_month(transactions, savings, debts, reference);
        let mut insights = Vec::new();

        if analytics.monthly_expenses > analytics.monthly_income * 0.8 {
            insights.push(Insight {
                kind: InsightKind::Warning,
                title: "High Spending Alert".into(),
                message: "Your expenses are over 80% of your income this month. \
                          Consider reducing non-essential spending."
                    .into(),
            });
        }

        if analytics.savings_progress < 25.0 {
            insights.push(Insight {
                kind: InsightKind::Info,
                title: "Savings Opportunity".into(),
                message: "Your savings progress is below 25%. \
                          Try setting aside 20% of your income for savings."
                    .into(),
            });
        } else if analytics.savings_progress > 75.0 {
            insights.push(Insight {
                kind: InsightKind::Success,
                title: "Excellent Savings Progress".into(),
                message: "Great job! You're making excellent progress on your savings goals."
                    .into(),
            });
        }

        if analytics.debt_progress < 50.0 && !debts.is_empty() {
            insights.push(Insight {
                kind: InsightKind::Warning,
                title: "Debt Management".into(),
                message: "Consider focusing on paying off high-interest debts first \
                          to reduce overall debt burden."
                    .into(),
            });
        }

        if totals.total_balance < 0.0 {
            insights.push(Insight {
                kind: InsightKind::Critical,
                title: "Negative Balance".into(),
                message: "Your expenses exceed your income. Review your spending habits \
                          and consider additional income sources."
                    .into(),
            });
        } else if totals.total_balance > totals.total_income * 0.3 {
            insights.push(Insight {
                kind: InsightKind::Success,
                title: "Strong Financial Position".into(),
                message: "You're maintaining a healthy balance. Consider investing surplus funds."
                    .into(),
            });
        }

        if let Some(top) = analytics.top_categories.first() {
            if top.amount > analytics.monthly_expenses * 0.4 {
                let share = (top.amount / analytics.monthly_expenses * 100.0).round();
                insights.push(Insight {
                    kind: InsightKind::Info,
                    title: "Category Focus".into(),
                    message: format!(
                        "{} accounts for {}% of your expenses. \
                         Consider if this aligns with your priorities.",
                        top.category, share
                    ),
                });
            }
        }

        if let Some(change) = AnalyticsService::spending_change(transactions, reference) {
            if change > 20.0 {
                insights.push(Insight {
                    kind: InsightKind::Warning,
                    title: "Spending Increase".into(),
                    message: format!(
                        "Your spending increased by {}% compared to last month. \
                         Review your recent expenses.",
                        change.round()
                    ),
                });
            } else if change < -20.0 {
                insights.push(Insight {
                    kind: InsightKind::Success,
                    title: "Spending Reduction".into(),
                    message: format!(
                        "Great job! Your spending decreased by {}% compared to last month.",
                        change.abs().round()
                    ),
                });
            }
        }

        insights
    }

    /// Actionable recommendations, highest priority rules first.
    pub fn recommendations(
        transactions: &[Transaction],
        savings: &[SavingsGoal],
        debts: &[Debt],
        reference: NaiveDate,
    ) -> Vec<Recommendation> {
        let totals = SummaryService::totals(transactions, savings, debts);
        let analytics = AnalyticsService::for_month(transactions, savings, debts, reference);
        let mut recommendations = Vec::new();

        // Three months of spending, using the all-time expense total as the baseline.
        let emergency_fund = totals.total_expenses * 3.0;
        if totals.total_savings < emergency_fund {
            recommendations.push(Recommendation {
                priority: Priority::High,
                title: "Build Emergency Fund".into(),
                description: format!(
                    "Aim to save ${:.2} (3 months of expenses) for emergencies.",
                    emergency_fund
                ),
            });
        }

        if !DebtService::high_interest(debts).is_empty() {
            recommendations.push(Recommendation {
                priority: Priority::High,
                title: "Prioritize High-Interest Debt".into(),
                description: "Focus on paying off debts with interest rates above 10% first."
                    .into(),
            });
        }

        if totals.total_balance > totals.total_income * 0.2 && totals.total_savings > emergency_fund
        {
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                title: "Consider Investing".into(),
                description: "With strong savings, consider investing surplus funds \
                              for long-term growth."
                    .into(),
            });
        }

        if analytics.monthly_expenses > analytics.monthly_income * 0.7 {
            recommendations.push(Recommendation {
                priority: Priority::High,
                title: "Create Detailed Budget".into(),
                description: "Track all expenses and create a budget to better manage \
                              your spending."
                    .into(),
            });
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn overspending_month_raises_high_spending_alert() {
        let transactions = vec![
            Transaction::new(TransactionKind::Income, 1000.0, "Salary", "Pay").on(reference()),
            Transaction::new(TransactionKind::Expense, 900.0, "Rent", "Rent").on(reference()),
        ];
        let insights = InsightService::insights(&transactions, &[], &[], reference());
        assert!(insights.iter().any(|i| i.title == "High Spending Alert"));
    }

    #[test]
    fn negative_balance_is_critical() {
        let transactions = vec![
            Transaction::new(TransactionKind::Expense, 500.0, "Rent", "Rent").on(reference()),
        ];
        let insights = InsightService::insights(&transactions, &[], &[], reference());
        let negative = insights
            .iter()
            .find(|i| i.title == "Negative Balance")
            .expect("negative balance insight");
        assert_eq!(negative.kind, InsightKind::Critical);
    }

    #[test]
    fn emergency_fund_recommendation_includes_target() {
        let transactions = vec![
            Transaction::new(TransactionKind::Expense, 100.0, "Food", "Groceries").on(reference()),
        ];
        let recommendations = InsightService::recommendations(&transactions, &[], &[], reference());
        let fund = recommendations
            .iter()
            .find(|r| r.title == "Build Emergency Fund")
            .expect("emergency fund recommendation");
        assert!(fund.description.contains("$300.00"));
    }
}
