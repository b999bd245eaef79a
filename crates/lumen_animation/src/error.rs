//! Plan loading errors

use thiserror::Error;

/// Errors from reading transition plan documents
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("plan has no target")]
    MissingTarget,

    #[error("failed to parse plan: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read plan: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
