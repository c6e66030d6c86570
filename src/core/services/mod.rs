pub mod analytics_service;
pub mod debt_service;
pub mod insight_service;
pub mod savings_service;
pub mod summary_service;
pub mod transaction_service;

pub use analytics_service::AnalyticsService;
pub use debt_service::DebtService;
pub use insight_service::InsightService;
pub use savings_service::SavingsService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::FinanceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("{0}")]
    Invalid(String),
}
