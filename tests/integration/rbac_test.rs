//! Integration tests for role-based access and field projection.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{ADMIN, EMPLOYEE, HR, TestApp, new_employee};

#[tokio::test]
async fn test_admin_creates_hr_who_can_log_in() {
    let app = TestApp::new().await;
    let admin = app.login_as(ADMIN).await;

    let created = app
        .request(
            "POST",
            "/employees",
            Some(new_employee("recruiter@example.com", Some("hr"), "HR")),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "recruiter@example.com", "password": "securepassword" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["role"], "hr");
}

#[tokio::test]
async fn test_hr_cannot_create_privileged_accounts() {
    let app = TestApp::new().await;
    let hr = app.login_as(HR).await;
    let users_before = app.user_count().await;

    for role in ["admin", "hr"] {
        let response = app
            .request(
                "POST",
                "/employees",
                Some(new_employee(&format!("{role}2@example.com"), Some(role), "HR")),
                Some(&hr),
            )
            .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(
            response.message(),
            "HR users are only allowed to create Employees. You cannot create Admin or HR users."
        );
    }

    assert_eq!(app.user_count().await, users_before);
    let list = app.request("GET", "/employees", None, Some(&hr)).await;
    assert_eq!(list.body["total"], 8);

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "admin2@example.com", "password": "securepassword" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_hr_can_create_employee() {
    let app = TestApp::new().await;
    let hr = app.login_as(HR).await;

    let response = app
        .request(
            "POST",
            "/employees",
            Some(new_employee("newhire@example.com", Some("employee"), "Sales")),
            Some(&hr),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_employee_is_read_only() {
    let app = TestApp::new().await;
    let employee = app.login_as(EMPLOYEE).await;

    let create = app
        .request(
            "POST",
            "/employees",
            Some(new_employee("x@example.com", None, "Sales")),
            Some(&employee),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
    assert_eq!(create.message(), "You are not allowed to perform this action");

    let update = app
        .request(
            "PUT",
            "/employees/1",
            Some(json!({ "salary": 1.0 })),
            Some(&employee),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request("DELETE", "/employees/1", None, Some(&employee))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let admin = app.login_as(ADMIN).await;
    let unchanged = app.request("GET", "/employees/1", None, Some(&admin)).await;
    assert_eq!(unchanged.body["salary"], 85000.0);
}

#[tokio::test]
async fn test_forbidden_precedes_not_found() {
    let app = TestApp::new().await;
    let employee = app.login_as(EMPLOYEE).await;

    let response = app
        .request("DELETE", "/employees/999", None, Some(&employee))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_employee_view_hides_salary() {
    let app = TestApp::new().await;
    let employee = app.login_as(EMPLOYEE).await;

    let list = app
        .request("GET", "/employees", None, Some(&employee))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    for item in list.body["employees"].as_array().expect("employees array") {
        assert!(item.get("salary").is_none());
        assert!(item.get("name").is_some());
        assert!(item.get("department").is_some());
    }

    let single = app
        .request("GET", "/employees/3", None, Some(&employee))
        .await;
    assert_eq!(single.status, StatusCode::OK);
    assert_eq!(single.body["name"], "Carol Williams");
    assert!(single.body.get("salary").is_none());
}

#[tokio::test]
async fn test_privileged_views_include_salary() {
    let app = TestApp::new().await;

    for account in [ADMIN, HR] {
        let token = app.login_as(account).await;
        let list = app.request("GET", "/employees", None, Some(&token)).await;
        for item in list.body["employees"].as_array().expect("employees array") {
            assert!(item["salary"].is_number());
        }
    }
}
