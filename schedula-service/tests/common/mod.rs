use std::sync::Arc;

use auth::Role;
use auth::TokenService;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use schedula_service::domain::user::service::AuthService;
use schedula_service::inbound::http::router::create_router;
use schedula_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on an in-memory store
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub token_service: Arc<TokenService>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());
        let token_service = Arc::new(TokenService::new(TEST_SECRET, Duration::hours(24)));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repository),
            Arc::clone(&token_service),
        ));

        let router = create_router(auth_service, Arc::clone(&token_service));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            token_service,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub async fn signup(&self, body: Value) -> reqwest::Response {
        self.post("/api/auth/signup")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and return a fresh token for them.
    pub async fn register_and_login(&self, college_id: &str, email: &str, role: &str) -> String {
        let response = self
            .signup(json!({
                "college_id": college_id,
                "name": "Test User",
                "email": email,
                "phone": "555-0100",
                "password": "pass_word!",
                "role": role
            }))
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = self
            .login(email, "pass_word!")
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }

    /// Token signed with the server's secret but issued at an arbitrary instant.
    pub fn token_issued_at(&self, subject: &str, role: Role, issued_at: DateTime<Utc>) -> String {
        self.token_service
            .issue_at(subject, role, issued_at)
            .expect("Failed to issue token")
    }
}

pub fn jane() -> Value {
    json!({
        "college_id": "C1",
        "name": "Jane",
        "email": "jane@x.com",
        "phone": "123",
        "password": "secret1",
        "role": "faculty"
    })
}
