pub mod dao;
pub mod http;
pub mod models;

pub use http::{PayrollServices, router};
pub use models::{PSelect, PayrollComment, PayrollSite, PayrollTask, TaskChoice};
