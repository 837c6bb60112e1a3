use thiserror::Error;

/// Errors returned by service-layer operations.
///
/// Translated to HTTP status codes only at the API boundary; nothing in the
/// service layer panics or retries on failure.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Store(#[from] mongodb::error::Error),
}
