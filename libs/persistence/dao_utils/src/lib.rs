pub mod error_handling;
pub mod pg_entity;
pub mod query_helpers;

pub use error_handling::CommonDaoError;
pub use pg_entity::{PgEntity, PgListDao, flag, text, us_date};
pub use query_helpers::{
    PgParam, PgParamBox, PgParamVec, SelectBuilder, create_param_refs,
    quote_ident,
};
