use std::collections::BTreeMap;

use axum::{
    body::to_bytes,
    extract::{FromRequest, Query, Request},
    http::header::CACHE_CONTROL,
};
use common_errors::AppError;
use serde_json::{Map, Value};

use crate::error::ParamError;

const BODY_LIMIT: usize = 1024 * 1024;

/// Raw request parameters for a list endpoint, sourced from the query
/// string and, when present, a JSON object body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    values: BTreeMap<String, String>,
    cache_control: Option<String>,
}

impl ListParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            cache_control: None,
        }
    }

    /// Flattens a JSON object into string values. `null` counts as absent.
    pub fn from_json(body: Map<String, Value>) -> Result<Self, ParamError> {
        let mut params = Self::default();
        params.merge_json(body)?;
        Ok(params)
    }

    pub fn with_cache_control(mut self, header: impl Into<String>) -> Self {
        self.cache_control = Some(header.into());
        self
    }

    fn merge_json(&mut self, body: Map<String, Value>) -> Result<(), ParamError> {
        for (key, value) in body {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ParamError::invalid_value(
                        &key,
                        "expected a scalar value",
                    ));
                }
            };
            self.values.insert(key, value);
        }
        Ok(())
    }

    /// Non-blank value for an exact parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Like `get`, ignoring the case of the parameter name.
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The `Cache-Control` request header, if any.
    pub fn cache_control_header(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }
}

impl<S> FromRequest<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();

        let mut params = match parts.uri.query() {
            Some(_) => {
                let Query(pairs) =
                    Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
                        .map_err(|e| ParamError::InvalidQuery(e.body_text()))?;
                Self::from_pairs(pairs)
            }
            None => Self::default(),
        };
        params.cache_control = parts
            .headers
            .get(CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let bytes = to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| ParamError::InvalidJson(e.to_string()))?;
        if !bytes.iter().all(u8::is_ascii_whitespace) {
            let body = match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(ParamError::InvalidJson(
                        "body must be a JSON object".into(),
                    )
                    .into());
                }
                Err(e) => return Err(ParamError::InvalidJson(e.to_string()).into()),
            };
            params.merge_json(body)?;
        }

        Ok(params)
    }
}
