//! Response DTOs.

use serde::{Deserialize, Serialize};

use hrms_auth::{LoginResult, RequestContext};
use hrms_core::types::{Page, UserId};
use hrms_entity::employee::EmployeeView;
use hrms_entity::user::Role;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: Role,
    pub name: String,
    pub user_id: UserId,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: result.token_type,
            role: result.role,
            name: result.name,
            user_id: result.user_id,
        }
    }
}

/// Body of `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&RequestContext> for MeResponse {
    fn from(ctx: &RequestContext) -> Self {
        Self {
            id: ctx.user_id,
            name: ctx.name.clone(),
            email: ctx.email.clone(),
            role: ctx.role,
        }
    }
}

/// Body of `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    /// Employees on this page, projected for the caller.
    pub employees: Vec<EmployeeView>,
    /// Total matching employees across all pages.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl From<Page<EmployeeView>> for EmployeeListResponse {
    fn from(page: Page<EmployeeView>) -> Self {
        Self {
            employees: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Service banner.
    pub message: String,
    /// Crate version.
    pub version: String,
}
