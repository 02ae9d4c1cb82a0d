//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use hrms_api::AppState;
use hrms_core::config::AppConfig;
use hrms_core::types::UserId;
use hrms_database::{Database, MemoryStore, UserRepository};
use hrms_entity::user::{CreateUser, Role};

/// Seeded demo credentials.
pub const ADMIN: (&str, &str) = ("admin@example.com", "admin123");
pub const HR: (&str, &str) = ("hr@example.com", "hr123");
pub const EMPLOYEE: (&str, &str) = ("employee@example.com", "emp123");

/// Number of sample employees inserted by the seeder.
pub const SEEDED_EMPLOYEES: u64 = 8;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub store: MemoryStore,
    /// Wired application state
    pub state: AppState,
}

/// Configuration with cheap hashing and a fixed secret.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.hash_memory_kib = 64;
    config.auth.hash_iterations = 1;
    config.seed.enabled = false;
    config
}

impl TestApp {
    /// An app over a store holding the default accounts and sample employees.
    pub async fn new() -> Self {
        let app = Self::empty();
        let seeded = app
            .state
            .seeder()
            .seed_if_empty()
            .await
            .expect("Failed to seed store");
        assert!(seeded);
        app
    }

    /// An app over an empty store.
    pub fn empty() -> Self {
        let store = MemoryStore::new();
        let state = AppState::new(test_config(), Database::memory(store.clone()))
            .expect("Failed to build app state");
        let router = hrms_api::build_app(state.clone());

        Self {
            router,
            store,
            state,
        }
    }

    /// Insert an account directly and return its id.
    pub async fn create_account(&self, email: &str, password: &str, role: Role) -> UserId {
        let password_hash = self
            .state
            .password_hasher
            .hash_password(password)
            .expect("Failed to hash password");

        self.store
            .users()
            .create(&CreateUser {
                name: email.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .expect("Failed to create account")
            .id
    }

    /// Login and return the access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self.request("POST", "/auth/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Login as one of the seeded accounts.
    pub async fn login_as(&self, (email, password): (&str, &str)) -> String {
        self.login(email, password).await
    }

    /// Make an HTTP request with a JSON body to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, body, token).await
    }

    /// Make an HTTP request with a raw body to the test app
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Number of user accounts in the store.
    pub async fn user_count(&self) -> u64 {
        use hrms_core::traits::Repository;
        self.store.users().count().await.expect("Failed to count users")
    }

    /// Shared handle to the token service for forging test tokens.
    pub fn tokens(&self) -> Arc<hrms_auth::TokenService> {
        Arc::clone(&self.state.token_service)
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// `message` field of an error body.
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}

/// A create-employee body for `email`.
pub fn new_employee(email: &str, role: Option<&str>, department: &str) -> Value {
    let mut body = serde_json::json!({
        "name": "Jane Smith",
        "email": email,
        "password": "securepassword",
        "department": department,
        "job_role": "Software Engineer",
        "salary": 90000.0,
    });
    if let Some(role) = role {
        body["role"] = Value::from(role);
    }
    body
}
