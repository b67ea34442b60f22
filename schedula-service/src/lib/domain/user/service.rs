use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for signup and login.
///
/// Stateless between calls; the repository and token service are injected.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_service` - Access token issuer
    pub fn new(repository: Arc<UR>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<UserId, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = NewUser {
            college_id: command.college_id,
            name: command.name,
            email: command.email,
            phone: command.phone,
            password_hash,
            role: command.role,
        };

        let user_id = self.repository.insert(user).await?;
        tracing::info!(user_id = %user_id, role = %command.role, "User registered");

        Ok(user_id)
    }

    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, UserError> {
        let Some(user) = self.repository.find_by_email(&credentials.email).await? else {
            self.password_hasher.verify_decoy(&credentials.password);
            tracing::info!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)?
        {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let token = self.token_service.issue(user.id, user.role)?;
        tracing::info!(user_id = %user.id, role = %user.role, "Login succeeded");

        Ok(LoginOutcome { token, user })
    }
}
