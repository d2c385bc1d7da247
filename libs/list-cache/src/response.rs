use axum::{
    Json,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{entity::ListEntity, handler::ListOutcome};

pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// `{"count": n, "<plural>": [...]}`, or `{"count": n}` for count-only
/// requests.
struct ListEnvelope<'a, T> {
    rows: &'a [T],
    count_only: bool,
}

impl<T: ListEntity> Serialize for ListEnvelope<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.count_only { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("count", &self.rows.len())?;
        if !self.count_only {
            map.serialize_entry(T::PLURAL, self.rows)?;
        }
        map.end()
    }
}

impl<T: ListEntity> IntoResponse for ListOutcome<T> {
    fn into_response(self) -> Response {
        let envelope = ListEnvelope {
            rows: &self.rows,
            count_only: self.count_only,
        };
        (
            [(X_CACHE, HeaderValue::from_static(self.status.as_str()))],
            Json(envelope),
        )
            .into_response()
    }
}
