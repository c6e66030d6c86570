use chrono::NaiveDate;
use fintrack_core::domain::{Debt, SavingsGoal, Transaction, TransactionKind};

pub fn income(amount: f64, description: &str, date: NaiveDate) -> Transaction {
    Transaction::new(TransactionKind::Income, amount, "Salary", description).on(date)
}

pub fn expense(amount: f64, category: &str, description: &str, date: NaiveDate) -> Transaction {
    Transaction::new(TransactionKind::Expense, amount, category, description).on(date)
}

pub fn goal(name: &str, target: f64, current: f64) -> SavingsGoal {
    SavingsGoal::new(name, target).with_current_amount(current)
}

pub fn debt(name: &str, amount: f64, rate: f64, min_payment: f64) -> Debt {
    Debt::new(name, amount, rate).with_min_payment(min_payment)
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
