use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Debt, SavingsGoal, Transaction};

const TOP_CATEGORY_LIMIT: usize = 5;
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Spending total for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub amount: f64,
}

/// Income and expense flow for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Transaction,
    Savings,
    Debt,
}

/// One row of the merged recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub label: String,
    pub date: Option<NaiveDate>,
}

/// Dashboard analytics scoped to the month containing the reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAnalytics {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Saved-so-far over summed targets, as a percentage.
    pub savings_progress: f64,
    /// Paid-down share of the original debt balances, as a percentage.
    pub debt_progress: f64,
    pub top_categories: Vec<CategorySpend>,
    pub recent_activity: Vec<ActivityItem>,
}

pub struct AnalyticsService;

impl AnalyticsService {
    /// Recomputes the dashboard analytics from scratch for the month that
    /// contains `reference`. Undated records never match a month filter.
    pub fn for_month(
        transactions: &[Transaction],
        savings: &[SavingsGoal],
        debts: &[Debt],
        reference: NaiveDate,
    ) -> MonthlyAnalytics {
        let monthly: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| in_month(t, reference.year(), reference.month()))
            .collect();

        let monthly_income: f64 = monthly
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let monthly_expenses: f64 = monthly
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        let mut spending: BTreeMap<&str, f64> = BTreeMap::new();
        for txn in monthly.iter().filter(|t| t.is_expense()) {
            *spending.entry(txn.category.as_str()).or_default() += txn.amount;
        }
        let mut top_categories: Vec<CategorySpend> = spending
            .into_iter()
            .map(|(category, amount)| CategorySpend {
                category: category.to_string(),
                amount,
            })
            .collect();
        // Stable sort over the name-ordered map keeps ties alphabetical.
        top_categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        top_categories.truncate(TOP_CATEGORY_LIMIT);

        let total_target = savings.iter().map(|g| g.target_amount).sum::<f64>();
        let total_saved = savings.iter().map(|g| g.current_amount).sum::<f64>();
        let savings_progress = if total_target > 0.0 {
            (total_saved / total_target) * 100.0
        } else {
            0.0
        };

        let total_debt = debts.iter().map(|d| d.amount).sum::<f64>();
        let total_remaining = debts.iter().map(|d| d.remaining_amount).sum::<f64>();
        let debt_progress = if total_debt > 0.0 {
            ((total_debt - total_remaining) / total_debt) * 100.0
        } else {
            0.0
        };

        MonthlyAnalytics {
            monthly_income,
            monthly_expenses,
            savings_progress,
            debt_progress,
            top_categories,
            recent_activity: Self::recent_activity(transactions, savings, debts),
        }
    }

    /// Merged feed across all three collections, newest first; undated
    /// entries sink to the end.
    pub fn recent_activity(
        transactions: &[Transaction],
        savings: &[SavingsGoal],
        debts: &[Debt],
    ) -> Vec<ActivityItem> {
        let mut activity: Vec<ActivityItem> = Vec::new();
        for txn in transactions {
            activity.push(ActivityItem {
                id: txn.id,
                kind: ActivityKind::Transaction,
                label: txn.description.clone(),
                date: txn.created_at,
            });
        }
        for goal in savings {
            activity.push(ActivityItem {
                id: goal.id,
                kind: ActivityKind::Savings,
                label: goal.name.clone(),
                date: goal.created_at,
            });
        }
        for debt in debts {
            activity.push(ActivityItem {
                id: debt.id,
                kind: ActivityKind::Debt,
                label: debt.name.clone(),
                date: debt.created_at,
            });
        }
        activity.sort_by(|a, b| b.date.cmp(&a.date));
        activity.truncate(RECENT_ACTIVITY_LIMIT);
        activity
    }

    /// Month-by-month income/expense series across the whole history,
    /// oldest month first. Feeds the income-vs-expenses chart.
    pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
        let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
        for txn in transactions {
            let Some(date) = txn.created_at else {
                continue;
            };
            let bucket = buckets.entry((date.year(), date.month())).or_default();
            if txn.is_income() {
                bucket.0 += txn.amount;
            } else {
                bucket.1 += txn.amount;
            }
        }
        buckets
            .into_iter()
            .map(|((year, month), (income, expenses))| MonthlyFlow {
                year,
                month,
                income,
                expenses,
            })
            .collect()
    }

    /// All-time expense totals per category, largest first. Feeds the
    /// category pie chart.
    pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpend> {
        let mut spending: BTreeMap<&str, f64> = BTreeMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *spending.entry(txn.category.as_str()).or_default() += txn.amount;
        }
        let mut breakdown: Vec<CategorySpend> = spending
            .into_iter()
            .map(|(category, amount)| CategorySpend {
                category: category.to_string(),
                amount,
            })
            .collect();
        breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        breakdown
    }

    /// Percent change in spending versus the previous calendar month.
    /// `None` when the previous month has no expenses to compare against.
    pub fn spending_change(transactions: &[Transaction], reference: NaiveDate) -> Option<f64> {
        let (prior_year, prior_month) = previous_month(reference);
        let expenses_in = |year: i32, month: u32| -> f64 {
            transactions
                .iter()
                .filter(|t| t.is_expense() && in_month(t, year, month))
                .map(|t| t.amount)
                .sum()
        };

        let current = expenses_in(reference.year(), reference.month());
        let prior = expenses_in(prior_year, prior_month);
        if prior > 0.0 {
            Some((current - prior) / prior * 100.0)
        } else {
            None
        }
    }
}

fn in_month(txn: &Transaction, year: i32, month: u32) -> bool {
    txn.created_at
        .map_or(false, |d| d.year() == year && d.month() == month)
}

fn previous_month(reference: NaiveDate) -> (i32, u32) {
    if reference.month() == 1 {
        (reference.year() - 1, 12)
    } else {
        (reference.year(), reference.month() - 1)
    }
}
