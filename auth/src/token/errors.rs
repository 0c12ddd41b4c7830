use thiserror::Error;

/// Error type for token operations.
///
/// Callers treating any verification failure as "unauthenticated" is
/// always safe; the variants exist for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Unexpected token kind: {0}")]
    WrongKind(String),

    #[error("Token is expired")]
    Expired,
}
