//! Error types for the storyboard engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type ReelResult<T> = Result<T, ReelError>;

/// Errors that can occur in the catalog backend or the export pipeline.
///
/// The editor's own operations (add/delete/duplicate/move/resize) are local
/// state transformations with no failure path and never return these.
#[derive(Error, Debug)]
pub enum ReelError {
    /// A record id is absent from its collection (update/delete/get).
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Login rejected: the credentials do not match the demo account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Registration rejected: the email is already registered.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// An authenticated session is required.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Publish was requested with no scenes loaded.
    #[error("no storyboard loaded")]
    EmptyStoryboard,

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PDF document assembly or serialization error.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReelError {
    /// Creates a NotFound error.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a Pdf error.
    pub fn pdf(msg: impl Into<String>) -> Self {
        Self::Pdf(msg.into())
    }
}
