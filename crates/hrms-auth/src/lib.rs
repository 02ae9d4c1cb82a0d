//! # hrms-auth
//!
//! Authentication and authorization for the HRMS service.
//!
//! ## Modules
//!
//! - `password`: salted Argon2id hashing and the password policy
//! - `jwt`: access token issuance and validation
//! - `rbac`: the role/action policy table and field visibility
//! - `authenticator`: resolves a bearer token to a [`RequestContext`]
//! - `login`: email/password login

pub mod authenticator;
pub mod context;
pub mod jwt;
pub mod login;
pub mod password;
pub mod rbac;

pub use authenticator::RequestAuthenticator;
pub use context::RequestContext;
pub use jwt::{Claims, TokenService};
pub use login::{LoginResult, LoginService};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Action, RbacEnforcer, RbacPolicies};
