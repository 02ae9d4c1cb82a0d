//! Convenience result type alias for HRMS.

use crate::error::AppError;

/// A specialized `Result` type for HRMS operations.
pub type AppResult<T> = Result<T, AppError>;
