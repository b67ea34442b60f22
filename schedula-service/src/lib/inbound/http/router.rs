use std::sync::Arc;
use std::time::Duration;

use auth::AllowedRoles;
use auth::Role;
use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::dashboard::admin_dashboard;
use super::handlers::dashboard::dashboard;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::middleware::authenticate;
use super::middleware::authorize;
use crate::domain::user::ports::AuthServicePort;

pub struct AppState<AS: AuthServicePort> {
    pub auth_service: Arc<AS>,
}

impl<AS: AuthServicePort> Clone for AppState<AS> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

pub fn create_router<AS: AuthServicePort>(
    auth_service: Arc<AS>,
    token_service: Arc<TokenService>,
) -> Router {
    let state = AppState { auth_service };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup::<AS>))
        .route("/api/auth/login", post(login::<AS>));

    let authenticated_routes = Router::new().route("/api/auth/dashboard", get(dashboard));

    let admin_routes = Router::new()
        .route("/api/auth/admin-dashboard", get(admin_dashboard))
        .route_layer(middleware::from_fn_with_state(
            Arc::new(AllowedRoles::from(Role::Admin)),
            authorize,
        ));

    // Layers added later run first, so authentication wraps the role gate.
    let protected_routes = Router::new()
        .merge(authenticated_routes)
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(token_service, authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
