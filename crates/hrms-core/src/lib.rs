//! # hrms-core
//!
//! Core crate for the HRMS employee directory service. Contains
//! configuration schemas, typed identifiers, pagination types, the generic
//! repository trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other HRMS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
