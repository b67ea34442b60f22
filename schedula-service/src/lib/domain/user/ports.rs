use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for signup and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// No token is issued; the user must log in afterwards.
    ///
    /// # Arguments
    /// * `command` - Validated signup fields, plaintext password included
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `CollegeIdAlreadyExists` - College ID is already registered
    /// * `Password` - Hashing failed
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn signup(&self, command: SignupCommand) -> Result<UserId, UserError>;

    /// Check credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Token plus the stored user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Token` - Token signing failed
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Either the whole record is stored or nothing is.
    ///
    /// # Arguments
    /// * `user` - Record to insert
    ///
    /// # Returns
    /// Store-assigned identifier
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `CollegeIdAlreadyExists` - College ID is already registered
    /// * `StoreUnavailable` - Store could not be reached
    /// * `DatabaseError` - Any other store failure
    async fn insert(&self, user: NewUser) -> Result<UserId, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string, matched exactly
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store could not be reached
    /// * `DatabaseError` - Any other store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
