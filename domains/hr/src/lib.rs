pub mod commands;
pub mod dao;
pub mod error;
pub mod handlers;
pub mod http;
pub mod models;

pub use commands::{CreateEmployeeCommand, EmployeeFields, UpdateEmployeeCommand};
pub use dao::{EmployeeDao, EmployeeStore};
pub use error::HrError;
pub use http::{HrServices, router};
pub use models::{Employee, EmployeeSummary, MutationResponse};
