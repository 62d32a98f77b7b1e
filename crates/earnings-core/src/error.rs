use thiserror::Error;

/// Rejected user input. Display texts are reported to HTTP callers verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid date format")]
    InvalidDate(String),
    #[error("Invalid amount format")]
    InvalidAmount(String),
    #[error("Invalid data")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Earning not found")]
    NoData { year: i32 },
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NoData { .. })
    }
}
