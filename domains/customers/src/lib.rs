pub mod dao;
pub mod http;
pub mod models;

pub use http::{CustomerServices, router};
pub use models::Site;
