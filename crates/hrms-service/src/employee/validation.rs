//! Field checks shared by create and update.

use hrms_core::error::AppError;
use hrms_entity::employee::UpdateEmployee;

/// Reject empty or whitespace-only text.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Salary must be a finite, non-negative amount.
pub fn require_salary(salary: f64) -> Result<(), AppError> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(AppError::validation("salary must be a non-negative number"));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with text on both sides and no spaces.
pub fn require_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation("email must be a valid email address"));
    }
    Ok(())
}

/// Validate only the fields present in a partial update.
pub fn validate_update(changes: &UpdateEmployee) -> Result<(), AppError> {
    if let Some(name) = &changes.name {
        require_text("name", name)?;
    }
    if let Some(department) = &changes.department {
        require_text("department", department)?;
    }
    if let Some(job_role) = &changes.job_role {
        require_text("job_role", job_role)?;
    }
    if let Some(salary) = changes.salary {
        require_salary(salary)?;
    }
    Ok(())
}
