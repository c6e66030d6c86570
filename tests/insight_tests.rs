mod common;

use common::{day, debt, expense, goal, income};
use fintrack_core::core::services::insight_service::{InsightKind, Priority};
use fintrack_core::core::services::InsightService;
use fintrack_core::planner::advisor::StrategyAdvisor;
use fintrack_core::planner::Strategy;

#[test]
fn healthy_portfolio_reports_strong_position_without_warnings() {
    let reference = day(2024, 6, 15);
    let transactions = vec![
        income(4000.0, "Pay", day(2024, 6, 1)),
        expense(1000.0, "Rent", "Rent", day(2024, 6, 2)),
        expense(400.0, "Food", "Groceries", day(2024, 6, 5)),
    ];
    let savings = vec![goal("Emergency", 5000.0, 4500.0)];

    let insights = InsightService::insights(&transactions, &savings, &[], reference);
    assert!(insights
        .iter()
        .any(|i| i.title == "Strong Financial Position" && i.kind == InsightKind::Success));
    assert!(insights
        .iter()
        .any(|i| i.title == "Excellent Savings Progress"));
    assert!(!insights.iter().any(|i| i.kind == InsightKind::Warning));
    assert!(!insights.iter().any(|i| i.kind == InsightKind::Critical));
}

#[test]
fn dominant_category_triggers_category_focus_with_share() {
    let reference = day(2024, 6, 15);
    let transactions = vec![
        income(4000.0, "Pay", day(2024, 6, 1)),
        expense(900.0, "Rent", "Rent", day(2024, 6, 2)),
        expense(100.0, "Food", "Groceries", day(2024, 6, 5)),
    ];
    let savings = vec![goal("Emergency", 1000.0, 500.0)];

    let insights = InsightService::insights(&transactions, &savings, &[], reference);
    let focus = insights
        .iter()
        .find(|i| i.title == "Category Focus")
        .expect("category focus insight");
    assert!(focus.message.starts_with("Rent accounts for 90%"));
}

#[test]
fn spending_swings_are_reported_in_both_directions() {
    let reference = day(2024, 6, 15);
    let increase = vec![
        expense(100.0, "Food", "Groceries", day(2024, 5, 10)),
        expense(150.0, "Food", "Groceries", day(2024, 6, 10)),
    ];
    let insights = InsightService::insights(&increase, &[], &[], reference);
    assert!(insights.iter().any(|i| i.title == "Spending Increase"));

    let decrease = vec![
        expense(150.0, "Food", "Groceries", day(2024, 5, 10)),
        expense(100.0, "Food", "Groceries", day(2024, 6, 10)),
    ];
    let insights = InsightService::insights(&decrease, &[], &[], reference);
    let reduction = insights
        .iter()
        .find(|i| i.title == "Spending Reduction")
        .expect("spending reduction insight");
    assert!(reduction.message.contains("33%"));
}

#[test]
fn slow_debt_payoff_raises_debt_management_warning() {
    let reference = day(2024, 6, 15);
    let debts = vec![debt("Card", 2000.0, 18.0, 50.0)];
    let insights = InsightService::insights(&[], &[], &debts, reference);
    assert!(insights
        .iter()
        .any(|i| i.title == "Debt Management" && i.kind == InsightKind::Warning));
}

#[test]
fn recommendations_escalate_for_stretched_finances() {
    let reference = day(2024, 6, 15);
    let transactions = vec![
        income(2000.0, "Pay", day(2024, 6, 1)),
        expense(1800.0, "Rent", "Rent", day(2024, 6, 2)),
    ];
    let debts = vec![debt("Card", 2400.0, 19.0, 60.0)];

    let recommendations = InsightService::recommendations(&transactions, &[], &debts, reference);
    let titles: Vec<&str> = recommendations.iter().map(|r| r.title.as_str()).collect();
    assert!(titles.contains(&"Build Emergency Fund"));
    assert!(titles.contains(&"Prioritize High-Interest Debt"));
    assert!(titles.contains(&"Create Detailed Budget"));
    assert!(recommendations
        .iter()
        .all(|r| r.priority == Priority::High));
}

#[test]
fn investing_is_suggested_once_the_emergency_fund_exists() {
    let reference = day(2024, 6, 15);
    let transactions = vec![
        income(5000.0, "Pay", day(2024, 6, 1)),
        expense(1000.0, "Rent", "Rent", day(2024, 6, 2)),
    ];
    // Savings comfortably above the 3x-expenses target.
    let savings = vec![goal("Emergency", 5000.0, 4000.0)];

    let recommendations =
        InsightService::recommendations(&transactions, &savings, &[], reference);
    let invest = recommendations
        .iter()
        .find(|r| r.title == "Consider Investing")
        .expect("investing recommendation");
    assert_eq!(invest.priority, Priority::Medium);
    assert!(!recommendations
        .iter()
        .any(|r| r.title == "Build Emergency Fund"));
}

#[test]
fn advisor_and_planner_agree_on_strategy_labels() {
    let debts = vec![debt("Card", 3000.0, 22.0, 60.0)];
    let rec = StrategyAdvisor::recommend(&debts);
    assert_eq!(rec.strategy, Some(Strategy::Avalanche));
    assert!(Strategy::Avalanche.description().contains("highest interest"));
    assert!(Strategy::Snowball.description().contains("smallest balances"));
}
