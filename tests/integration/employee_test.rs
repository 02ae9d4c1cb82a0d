//! Integration tests for the employee directory endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use hrms_entity::user::Role;

use crate::helpers::{ADMIN, HR, SEEDED_EMPLOYEES, TestApp, new_employee};

fn ids(body: &Value) -> Vec<i64> {
    body["employees"]
        .as_array()
        .expect("employees array")
        .iter()
        .map(|e| e["id"].as_i64().expect("numeric id"))
        .collect()
}

#[tokio::test]
async fn test_list_defaults() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let response = app.request("GET", "/employees", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], SEEDED_EMPLOYEES);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 10);
    assert_eq!(response.body["total_pages"], 1);
    assert_eq!(ids(&response.body), (1..=8).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_trailing_slash_alias() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let plain = app.request("GET", "/employees", None, Some(&token)).await;
    let slash = app.request("GET", "/employees/", None, Some(&token)).await;

    assert_eq!(slash.status, StatusCode::OK);
    assert_eq!(plain.body, slash.body);
}

#[tokio::test]
async fn test_pages_cover_every_employee_once() {
    let app = TestApp::new().await;
    let token = app.login_as(HR).await;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = app
            .request(
                "GET",
                &format!("/employees?page={page}&limit=3"),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["total"], SEEDED_EMPLOYEES);
        assert_eq!(response.body["total_pages"], 3);
        seen.extend(ids(&response.body));
    }

    assert_eq!(seen.len() as u64, SEEDED_EMPLOYEES);
    assert_eq!(seen, (1..=8).collect::<Vec<_>>());

    let past_end = app
        .request("GET", "/employees?page=4&limit=3", None, Some(&token))
        .await;
    assert_eq!(past_end.status, StatusCode::OK);
    assert!(ids(&past_end.body).is_empty());
    assert_eq!(past_end.body["total"], SEEDED_EMPLOYEES);

    let far_past_end = app
        .request(
            "GET",
            "/employees?page=1000000000000000000&limit=10",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(far_past_end.status, StatusCode::OK);
    assert!(ids(&far_past_end.body).is_empty());
    assert_eq!(far_past_end.body["total"], SEEDED_EMPLOYEES);
}

#[tokio::test]
async fn test_pagination_out_of_range_rejected() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    for query in ["page=0", "limit=0", "limit=101", "page=abc"] {
        let response = app
            .request("GET", &format!("/employees?{query}"), None, Some(&token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "query {query} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let response = app
        .request("GET", "/employees?search=SMITH", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["employees"][0]["name"], "Bob Smith");
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let response = app
        .request("GET", "/employees?search=%25", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 0);
}

#[tokio::test]
async fn test_filters_combine() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let response = app
        .request(
            "GET",
            "/employees?department=Engineering&search=e",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body["total"], 3);

    let exact_role = app
        .request(
            "GET",
            "/employees?department=Engineering&job_role=DevOps%20Engineer",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(exact_role.body["total"], 1);
    assert_eq!(exact_role.body["employees"][0]["name"], "Grace Wilson");

    let partial_department = app
        .request("GET", "/employees?department=Engineer", None, Some(&token))
        .await;
    assert_eq!(partial_department.body["total"], 0);
}

#[tokio::test]
async fn test_department_filter_three_of_five() {
    let app = TestApp::empty();
    app.create_account(ADMIN.0, ADMIN.1, Role::Admin).await;
    let token = app.login_as(ADMIN).await;

    let departments = ["Engineering", "Sales", "Engineering", "Finance", "Engineering"];
    for (i, department) in departments.iter().enumerate() {
        let response = app
            .request(
                "POST",
                "/employees",
                Some(new_employee(&format!("staff{i}@example.com"), None, department)),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request(
            "GET",
            "/employees?department=Engineering",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.body["total"], 3);
    assert_eq!(ids(&response.body), vec![1, 3, 5]);
}

#[tokio::test]
async fn test_get_employee() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let found = app.request("GET", "/employees/1", None, Some(&token)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["name"], "Alice Johnson");
    assert_eq!(found.body["salary"], 85000.0);

    let missing = app
        .request("GET", "/employees/999", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "Employee with id 999 not found");
    assert_eq!(missing.body["detail"], missing.body["message"]);

    let malformed = app
        .request("GET", "/employees/abc", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_employee_with_account() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;
    let users_before = app.user_count().await;

    let response = app
        .request(
            "POST",
            "/employees",
            Some(new_employee("jane@example.com", None, "Engineering")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], SEEDED_EMPLOYEES + 1);
    assert_eq!(response.body["name"], "Jane Smith");
    assert_eq!(response.body["salary"], 90000.0);
    assert_eq!(app.user_count().await, users_before + 1);

    let login = app.login("jane@example.com", "securepassword").await;
    let me = app.request("GET", "/me", None, Some(&login)).await;
    assert_eq!(me.body["role"], "employee");
}

#[tokio::test]
async fn test_create_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;
    let users_before = app.user_count().await;

    let response = app
        .request(
            "POST",
            "/employees",
            Some(new_employee(HR.0, None, "HR")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), "Email already registered");
    assert_eq!(app.user_count().await, users_before);

    let list = app.request("GET", "/employees", None, Some(&token)).await;
    assert_eq!(list.body["total"], SEEDED_EMPLOYEES);
}

#[tokio::test]
async fn test_create_rejects_invalid_bodies() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let mut negative_salary = new_employee("neg@example.com", None, "Sales");
    negative_salary["salary"] = json!(-1.0);

    let mut unknown_role = new_employee("role@example.com", Some("superuser"), "Sales");
    unknown_role["name"] = json!("Role Person");

    let mut uppercase_role = new_employee("upper@example.com", Some("ADMIN"), "Sales");
    uppercase_role["name"] = json!("Upper Role");

    let mut missing_field = new_employee("missing@example.com", None, "Sales");
    missing_field
        .as_object_mut()
        .expect("object body")
        .remove("department");

    let mut short_password = new_employee("short@example.com", None, "Sales");
    short_password["password"] = json!("abc");

    for body in [
        negative_salary,
        unknown_role,
        uppercase_role,
        missing_field,
        short_password,
    ] {
        let response = app
            .request("POST", "/employees", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {body} should be rejected"
        );
    }

    let list = app.request("GET", "/employees", None, Some(&token)).await;
    assert_eq!(list.body["total"], SEEDED_EMPLOYEES);
}

#[tokio::test]
async fn test_partial_update() {
    let app = TestApp::new().await;
    let token = app.login_as(HR).await;

    let response = app
        .request(
            "PUT",
            "/employees/2",
            Some(json!({ "salary": 80000.0, "job_role": "Head of HR" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Bob Smith");
    assert_eq!(response.body["department"], "HR");
    assert_eq!(response.body["job_role"], "Head of HR");
    assert_eq!(response.body["salary"], 80000.0);

    let fetched = app.request("GET", "/employees/2", None, Some(&token)).await;
    assert_eq!(fetched.body, response.body);
}

#[tokio::test]
async fn test_update_errors() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let missing = app
        .request(
            "PUT",
            "/employees/999",
            Some(json!({ "name": "Nobody" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let negative = app
        .request(
            "PUT",
            "/employees/1",
            Some(json!({ "salary": -5.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(negative.status, StatusCode::UNPROCESSABLE_ENTITY);

    let empty_name = app
        .request(
            "PUT",
            "/employees/1",
            Some(json!({ "name": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(empty_name.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new().await;
    let token = app.login_as(ADMIN).await;

    let first = app
        .request("DELETE", "/employees/4", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let second = app
        .request("DELETE", "/employees/4", None, Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    let list = app.request("GET", "/employees", None, Some(&token)).await;
    assert_eq!(list.body["total"], SEEDED_EMPLOYEES - 1);
    assert!(!ids(&list.body).contains(&4));
}
