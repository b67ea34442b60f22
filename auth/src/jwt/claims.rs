use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;
use crate::role::Role;

/// Claim set carried by every access token.
///
/// All four claims are mandatory; a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Canonical role of the subject
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, valid for `lifetime` from `issued_at`.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `role` - Role asserted by the token
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Validity window
    ///
    /// # Errors
    /// * `LifetimeOutOfRange` - `issued_at + lifetime` is not a representable instant
    pub fn for_user(
        user_id: impl ToString,
        role: Role,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, TokenError> {
        let expiration = issued_at
            .checked_add_signed(lifetime)
            .ok_or(TokenError::LifetimeOutOfRange)?;

        Ok(Self {
            sub: user_id.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// A token is live strictly before its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
