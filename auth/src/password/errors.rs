use thiserror::Error;

/// Failures of the credential hasher.
///
/// None of the messages carry the plaintext being hashed or checked.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Invalid Argon2 cost parameters: {0}")]
    InvalidParameters(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored hash is unusable: {0}")]
    MalformedHash(String),
}
