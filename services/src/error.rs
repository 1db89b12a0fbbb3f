use sea_orm::DbErr;

/// Every way a module command can fail.
///
/// The `Display` text of `Storage` carries the driver detail and is meant for
/// logs only; use [`AppError::public_message`] for anything sent to a client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The targeted module does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A write that should have changed one row changed none, yet the row exists.
    #[error("{0}")]
    Conflict(String),

    /// Connectivity or constraint failure reported by the database.
    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),

    /// An uploaded image has a content type outside the accepted set.
    #[error("{0}")]
    UnsupportedMedia(String),

    /// The request body exceeds the configured upload limit.
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl AppError {
    /// The message safe to show a client. Storage detail is redacted.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Storage(_) => "A storage error occurred".to_string(),
            other => other.to_string(),
        }
    }
}
