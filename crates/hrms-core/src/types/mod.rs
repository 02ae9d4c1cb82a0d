//! Core type definitions used across the HRMS workspace.

pub mod id;
pub mod pagination;

pub use id::{EmployeeId, UserId};
pub use pagination::{Page, PageRequest};
