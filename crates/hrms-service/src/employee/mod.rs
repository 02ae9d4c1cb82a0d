//! Employee directory operations.

pub mod service;
pub mod validation;

pub use service::{CreateEmployeeRequest, EmployeeService};
