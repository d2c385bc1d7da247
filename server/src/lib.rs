pub mod app;
pub mod config;

pub use app::{ApiDoc, Services, build_router, cors_layer};
pub use config::{CacheBackendKind, ServerConfig};
