use auth::TokenError;
use thiserror::Error;

/// Error for SubjectId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubjectIdError {
    #[error("Subject id must not be empty")]
    Empty,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// I/O failure reported by the external identity store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Identity store unavailable: {0}")]
    Unavailable(String),
}

/// Failure to resolve a request's credential into an identity.
///
/// Every variant is caller-visible as "unauthenticated"; the distinction
/// exists for diagnostics and logging only.
#[derive(Debug, Clone, Error)]
pub enum AuthFailure {
    #[error("No credential presented")]
    Missing,

    #[error("Invalid credential: {0}")]
    Invalid(#[from] TokenError),

    #[error("Subject no longer exists")]
    SubjectGone,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthFailure {
    /// Stable failure-kind label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthFailure::Missing => "missing",
            AuthFailure::Invalid(_) => "invalid",
            AuthFailure::SubjectGone => "subject_gone",
            AuthFailure::Store(_) => "store",
        }
    }
}
