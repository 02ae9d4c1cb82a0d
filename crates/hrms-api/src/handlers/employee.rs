//! Employee directory handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hrms_core::error::AppError;
use hrms_entity::employee::{Employee, EmployeeView};
use hrms_service::CreateEmployeeRequest;

use crate::dto::request::{CreateEmployeeBody, ListEmployeesQuery, UpdateEmployeeBody};
use crate::dto::response::EmployeeListResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery, parse_employee_id};
use crate::state::AppState;

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ListEmployeesQuery>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let (filter, page) = query.into_parts()?;
    let result = state.employee_service.list(&auth, filter, page).await?;
    Ok(Json(result.into()))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<EmployeeView>> {
    let id = parse_employee_id(&id)?;
    let employee = state.employee_service.get_by_id(&auth, id).await?;
    Ok(Json(employee))
}

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreateEmployeeBody>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let req = CreateEmployeeRequest::try_from(body)?;
    let employee = state.employee_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateEmployeeBody>,
) -> ApiResult<Json<Employee>> {
    let id = parse_employee_id(&id)?;
    let employee = state
        .employee_service
        .update(&auth, id, body.into())
        .await?;
    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_employee_id(&id)?;
    if state.employee_service.delete(&auth, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Employee with id {id} not found")).into())
    }
}
