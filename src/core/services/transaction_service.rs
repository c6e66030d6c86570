use crate::domain::{Transaction, TransactionKind};

use super::{ServiceError, ServiceResult};

/// How a filtered transaction list should be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionSort {
    /// Newest first; undated records sink to the end.
    #[default]
    Date,
    /// Largest first.
    Amount,
    /// Category name, ascending.
    Category,
}

/// Filter over the transaction list: free-text search plus a kind toggle.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub search: Option<String>,
    pub kind: Option<TransactionKind>,
    pub sort: TransactionSort,
}

pub struct TransactionService;

impl TransactionService {
    /// Rejects records the entry form would not accept.
    pub fn validate(transaction: &Transaction) -> ServiceResult<()> {
        if !(transaction.amount > 0.0) {
            return Err(ServiceError::Invalid(
                "transaction amount must be positive".into(),
            ));
        }
        if transaction.description.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "transaction description is required".into(),
            ));
        }
        Ok(())
    }

    /// Applies search, kind filter, and sort. Search matches description and
    /// category, case-insensitively.
    pub fn filter<'a>(
        transactions: &'a [Transaction],
        query: &TransactionQuery,
    ) -> Vec<&'a Transaction> {
        let needle = query
            .search
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let mut matched: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| {
                let matches_search = needle.is_empty()
                    || t.description.to_lowercase().contains(&needle)
                    || t.category.to_lowercase().contains(&needle);
                let matches_kind = query.kind.map_or(true, |kind| t.kind == kind);
                matches_search && matches_kind
            })
            .collect();
        match query.sort {
            TransactionSort::Date => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            TransactionSort::Amount => matched.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
            TransactionSort::Category => matched.sort_by(|a, b| a.category.cmp(&b.category)),
        }
        matched
    }
}
