//! Pure domain models (Transaction, SavingsGoal, Debt).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod debt;
pub mod savings;
pub mod transaction;

pub use common::*;
pub use debt::*;
pub use savings::*;
pub use transaction::*;
