use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound)
    }
}

/// Failures raised while building a school report or while waiting on its worker.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to render document: {0}")]
    Render(String),

    #[error("Report worker failed: {0}")]
    Worker(String),
}
