//! Integration tests for login, token validation and `/me`.

use axum::http::{StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::json;

use hrms_core::traits::Repository;
use hrms_core::types::UserId;
use hrms_entity::user::Role;

use crate::helpers::{ADMIN, EMPLOYEE, HR, TestApp};

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::empty();

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": ADMIN.0, "password": ADMIN.1 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    assert_eq!(response.body["role"], "admin");
    assert_eq!(response.body["name"], "Admin User");

    let token = response.body["access_token"].as_str().unwrap();
    let user_id = response.body["user_id"].as_i64().unwrap();
    let claims = app.tokens().validate(token, Utc::now()).unwrap();
    assert_eq!(claims.user_id, UserId::new(user_id));
    assert_eq!(claims.role, Role::Admin);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": HR.0, "password": "not-the-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": "not-the-password" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.message(), "Incorrect email or password");
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "ADMIN@example.com", "password": ADMIN.1 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_malformed_input() {
    let app = TestApp::new().await;

    let bad_email = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "not-an-email", "password": "x" })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(bad_email.body["error"], "VALIDATION_ERROR");

    let missing_password = app
        .request("POST", "/auth/login", Some(json!({ "email": ADMIN.0 })), None)
        .await;
    assert_eq!(missing_password.status, StatusCode::UNPROCESSABLE_ENTITY);

    let not_json = app
        .send("POST", "/auth/login", "{not json".to_string(), None)
        .await;
    assert_eq!(not_json.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_me_returns_identity() {
    let app = TestApp::new().await;
    let token = app.login_as(EMPLOYEE).await;

    let response = app.request("GET", "/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], EMPLOYEE.0);
    assert_eq!(response.body["name"], "John Doe");
    assert_eq!(response.body["role"], "employee");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or missing token");
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/employees", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or missing token");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new().await;
    let user_id = app.create_account("late@example.com", "password1", Role::Admin).await;

    let issued_at = Utc::now() - Duration::hours(25);
    let token = app.tokens().issue(user_id, Role::Admin, issued_at).unwrap();

    let response = app.request("GET", "/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or missing token");
}

#[tokio::test]
async fn test_deleted_user_token_is_unauthorized() {
    let app = TestApp::new().await;
    let user_id = app
        .create_account("leaver@example.com", "password1", Role::Hr)
        .await;
    let token = app.login("leaver@example.com", "password1").await;

    let before = app.request("GET", "/me", None, Some(&token)).await;
    assert_eq!(before.status, StatusCode::OK);

    assert!(app.store.users().delete(user_id).await.unwrap());

    let after = app.request("GET", "/employees", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_live_role_overrides_token_claim() {
    let app = TestApp::new().await;
    let user_id = app
        .create_account("plain@example.com", "password1", Role::Employee)
        .await;

    // Signed by the server, but the stored account is only an employee.
    let token = app.tokens().issue(user_id, Role::Admin, Utc::now()).unwrap();

    let me = app.request("GET", "/me", None, Some(&token)).await;
    assert_eq!(me.body["role"], "employee");

    let list = app.request("GET", "/employees", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body["employees"][0].get("salary").is_none());

    let delete = app
        .request("DELETE", "/employees/1", None, Some(&token))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}
