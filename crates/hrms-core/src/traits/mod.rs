//! Core traits defined in `hrms-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
