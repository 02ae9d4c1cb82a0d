//! Typed path parameter helpers.

use hrms_core::error::AppError;
use hrms_core::types::EmployeeId;

/// Parses an employee id from a path segment.
pub fn parse_employee_id(s: &str) -> Result<EmployeeId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid employee id: {s}")))
}
