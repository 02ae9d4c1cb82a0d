//! Employee directory entities.

pub mod model;
pub mod view;

pub use model::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};
pub use view::{EmployeeField, EmployeeView, FieldSet, RestrictedEmployee};
