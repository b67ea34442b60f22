use std::sync::Arc;

use auth::AllowedRoles;
use auth::Role;
use auth::TokenError;
use auth::TokenService;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::INVALID_TOKEN_MESSAGE;
use super::handlers::MISSING_TOKEN_MESSAGE;
use crate::domain::user::models::UserId;

/// Identity established by [`authenticate`], stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Middleware that validates the bearer token and attaches the caller's identity.
///
/// Every token failure produces the same 401; the cause is only logged.
pub async fn authenticate(
    State(token_service): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let verified = token_service.verify(token).map_err(|e| {
        match &e {
            TokenError::Expired => tracing::info!("Rejected expired token"),
            _ => tracing::warn!(error = %e, "Rejected token"),
        }
        ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
    })?;

    let user_id = UserId::from_string(&verified.subject).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user ID");
        ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        role: verified.role,
    });

    Ok(next.run(req).await)
}

/// Middleware that admits only callers whose role is in the allowed set.
///
/// Must be layered inside [`authenticate`].
pub async fn authorize(
    State(allowed): State<Arc<AllowedRoles>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(user) = req.extensions().get::<AuthenticatedUser>() else {
        tracing::error!("Role check reached without an authenticated user");
        return Err(ApiError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()));
    };

    if !allowed.permits(user.role) {
        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            allowed = %allowed,
            "Role not permitted"
        );
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let missing = || ApiError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string());

    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(missing)?
        .to_str()
        .map_err(|_| missing())?;

    match auth_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(missing()),
    }
}
