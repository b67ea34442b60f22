use thiserror::Error;

/// Why a token could not be issued or accepted.
///
/// The variants exist for diagnostics; callers at the HTTP boundary are
/// expected to collapse every verification failure into one response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token lifetime does not fit in a timestamp")]
    LifetimeOutOfRange,
}
