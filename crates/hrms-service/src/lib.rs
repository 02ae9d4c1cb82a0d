//! # hrms-service
//!
//! Business logic service layer for the HRMS service. Services enforce the
//! access policy for the acting identity, validate input, and orchestrate
//! the repositories.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod employee;
pub mod seed;

pub use employee::{CreateEmployeeRequest, EmployeeService};
pub use hrms_auth::RequestContext;
pub use seed::Seeder;
