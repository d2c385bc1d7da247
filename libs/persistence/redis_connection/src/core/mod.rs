pub mod backend;
pub mod value;

pub use backend::CacheBackend;
pub use value::{CacheValue, Json};
