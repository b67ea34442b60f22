use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::SignupForm;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn signup<AS: AuthServicePort>(
    State(state): State<AppState<AS>>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let Json(body) = body?;
    let command = SignupCommand::try_from(body.into_form()).map_err(UserError::from)?;

    state
        .auth_service
        .signup(command)
        .await
        .map_err(ApiError::from)
        .map(|user_id| ApiSuccess::new(StatusCode::CREATED, user_id.into()))
}

/// HTTP request body for signup (raw JSON)
///
/// Every field is optional at this level so that absence is reported as a
/// validation error naming the field rather than as a deserialization failure.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    college_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    password: Option<String>,
    role: Option<String>,
}

impl SignupRequest {
    fn into_form(self) -> SignupForm {
        SignupForm {
            college_id: self.college_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub message: String,
    pub id: String,
}

impl From<UserId> for SignupResponseData {
    fn from(user_id: UserId) -> Self {
        Self {
            message: "User registered successfully".to_string(),
            id: user_id.to_string(),
        }
    }
}
