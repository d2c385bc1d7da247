use std::ops::Deref;

use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};

use crate::cache::CacheError;

/// Conversion between a typed value and the bytes held by a cache backend.
pub trait CacheValue: Sized + Send + Sync {
    fn to_bytes(&self) -> Result<Bytes, CacheError>;

    fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError>;
}

/// JSON encoding for any serde type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn inner(self) -> T { self.0 }
}

impl<T: Serialize> Json<T> {
    /// Encodes without requiring an owned or deserializable value, so a
    /// borrowed slice can be written as-is.
    pub fn encode(&self) -> Result<Bytes, CacheError> {
        serde_json::to_vec(&self.0)
            .map(Bytes::from)
            .map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self { Json(value) }
}

impl<T> CacheValue for Json<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn to_bytes(&self) -> Result<Bytes, CacheError> { self.encode() }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError> {
        serde_json::from_slice(bytes)
            .map(Json)
            .map_err(|e| CacheError::Deserialization(e.to_string()))
    }
}
