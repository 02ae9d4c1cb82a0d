//! # hrms-database
//!
//! Data store access for the HRMS service: the repository traits the
//! services depend on, a PostgreSQL implementation backed by sqlx, and an
//! in-memory implementation used for tests and local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Database;
pub use repositories::{EmployeeRepository, UserRepository};
