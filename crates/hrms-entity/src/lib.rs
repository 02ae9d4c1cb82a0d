//! # hrms-entity
//!
//! Domain entity models for the HRMS employee directory. Every struct in
//! this crate represents a database table row or a domain value object.
//! Database entities additionally derive `sqlx::FromRow`.

pub mod employee;
pub mod user;
