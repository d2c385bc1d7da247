//! Read-through cache for filtered list endpoints.
//!
//! Each entity declares a field table, a key plan and its searchable
//! columns through [`ListEntity`]. A [`ListQueryHandler`] turns request
//! parameters into a [`QuerySpec`], derives a cache key and serves the page
//! from the cache or the backing store.

pub mod control;
pub mod entity;
pub mod error;
pub mod fields;
pub mod handler;
pub mod keys;
pub mod params;
pub mod response;
pub mod spec;

pub use control::CacheControl;
pub use entity::{ListEntity, str_of, text_of};
pub use error::ParamError;
pub use fields::{FieldDef, FieldKind, parse_bool, parse_date};
pub use handler::{
    CacheStatus, ListCacheSettings, ListOutcome, ListQueryHandler, Resolved,
};
pub use keys::{CacheKey, KeyPlan, KeySelector};
pub use params::ListParams;
pub use response::X_CACHE;
pub use spec::{QuerySpec, SearchTerm};
