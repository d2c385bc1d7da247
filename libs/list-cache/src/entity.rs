use std::borrow::Cow;

use serde::{Serialize, de::DeserializeOwned};

use crate::{fields::FieldDef, keys::KeyPlan};

/// A row type served by a cached list endpoint.
pub trait ListEntity:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Envelope key holding the rows, e.g. `employees`.
    const PLURAL: &'static str;
    const FIELDS: &'static [FieldDef];
    /// `None` for entities that are never cached.
    const KEYS: Option<KeyPlan>;
    /// Store columns searched by `q`.
    const SEARCH: &'static [&'static str];
    /// Answer with an empty page unless a structural filter is present.
    const REQUIRES_FILTER: bool = false;

    /// Text of the searchable fields, compared against `q` on cache hits.
    fn search_text(&self) -> Vec<Cow<'_, str>>;
}

/// Stringifies an optional id-like value for search matching.
pub fn text_of<T: ToString>(value: &Option<T>) -> Cow<'static, str> {
    value
        .as_ref()
        .map(|v| Cow::Owned(v.to_string()))
        .unwrap_or(Cow::Borrowed(""))
}

/// Borrows an optional string field for search matching.
pub fn str_of(value: &Option<String>) -> Cow<'_, str> {
    Cow::Borrowed(value.as_deref().unwrap_or(""))
}
