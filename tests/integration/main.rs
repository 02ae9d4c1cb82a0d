//! Integration tests driving the full router against the in-memory store.

mod helpers;

mod auth_test;
mod employee_test;
mod rbac_test;
