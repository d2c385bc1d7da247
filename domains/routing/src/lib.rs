pub mod dao;
pub mod http;
pub mod models;

pub use http::{RoutingServices, router};
pub use models::{Route, RoutingTask};
