pub mod dao;
pub mod query;
pub mod source;

pub use query::{Condition, Filter, Scalar, Search, StoreQuery};
pub use source::{ListSource, StoreError};
