use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Any authenticated user.
pub async fn dashboard(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("Hello {} with ID {}", user.role, user.user_id),
        },
    )
}

/// Administrators only; the router places this behind the role gate.
pub async fn admin_dashboard(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("Welcome Admin {}", user.user_id),
        },
    )
}
