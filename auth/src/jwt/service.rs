use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::TokenError;
use super::handler::JwtHandler;
use crate::role::Role;

/// Lifetime of an access token unless configured otherwise.
pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 24;
/// Longest lifetime a deployment may configure (one year).
pub const MAX_TOKEN_LIFETIME_HOURS: i64 = 366 * 24;

/// Identity established by a successfully verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub subject: String,
    pub role: Role,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Issues and verifies time-bounded access tokens.
///
/// Holds the process-wide signing secret for its whole lifetime and no
/// other state, so one instance can be shared across requests freely.
pub struct TokenService {
    handler: JwtHandler,
    lifetime: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Signing secret
    /// * `lifetime` - How long an issued token stays valid
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token for `subject` holding `role`, starting now.
    pub fn issue(&self, subject: impl ToString, role: Role) -> Result<String, TokenError> {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issue a token as if the current instant were `issued_at`.
    pub fn issue_at(
        &self,
        subject: impl ToString,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::for_user(subject, role, issued_at, self.lifetime)?;
        self.handler.encode(&claims)
    }

    /// Verify a token against the current instant.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against the instant `now`.
    ///
    /// Integrity is established before expiry is looked at, so a forged
    /// token is reported as forged even when it is also stale.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with our secret or was altered
    /// * `Malformed` - Token could not be parsed
    /// * `Expired` - Token is authentic but `now` is at or past its expiry
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedToken, TokenError> {
        let claims = self.handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(VerifiedToken {
            subject: claims.sub,
            role: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}
