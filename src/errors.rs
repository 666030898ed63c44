use thiserror::Error;

use crate::ledger::RecordId;

/// Guard failures raised on the mutation path. All of these are
/// user-correctable; the submission is aborted and nothing is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("another bill already uses the description `{0}`")]
    DuplicateDescription(String),
    #[error("description must not be empty")]
    InvalidDescription,
    #[error("amount must be greater than zero")]
    InvalidAmount,
    #[error("installment count must be a positive integer")]
    InvalidInstallmentCount,
    #[error("bill and installment must both be selected")]
    MissingSelection,
}

/// Failures reported by a record store. Mutations are one-shot: the caller
/// surfaces the error and abandons the operation, never retries or queues.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record `{0}` not found")]
    NotFound(RecordId),
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type that captures common failures across the crate.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
