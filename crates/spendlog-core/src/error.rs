//! Error types for Spendlog

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid date (expected YYYY-MM-DD): {0:?}")]
    InvalidDate(String),

    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Cannot remove '{0}': it is the last remaining category")]
    LastCategory(String),

    #[error("Nothing to export: no expenses match the selected filters")]
    EmptyExport,

    #[error("Expense id space exhausted")]
    IdsExhausted,

    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for rejected user input and guard conditions.
    ///
    /// These leave the ledger untouched and the caller is expected to
    /// re-prompt rather than abort.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::EmptyDescription
                | Self::InvalidDate(_)
                | Self::EmptyCategoryName
                | Self::DuplicateCategory(_)
                | Self::UnknownCategory(_)
                | Self::LastCategory(_)
                | Self::EmptyExport
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
