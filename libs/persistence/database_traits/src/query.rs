use std::fmt;

use chrono::NaiveDate;

/// A typed comparison value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
        }
    }
}

/// How a single structural filter compares against its column.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Exact(Scalar),
    /// Case-insensitive equality.
    IExact(String),
    /// Case-insensitive substring.
    Contains(String),
    Flag(bool),
}

impl Condition {
    /// Rendering used inside cache keys. Case-insensitive conditions are
    /// folded so `ACME` and `acme` share a key.
    pub fn key_value(&self) -> String {
        match self {
            Self::Exact(scalar) => scalar.to_string(),
            Self::IExact(v) | Self::Contains(v) => v.to_lowercase(),
            Self::Flag(v) => v.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: &'static str,
    pub column: &'static str,
    pub condition: Condition,
}

impl Filter {
    pub fn new(
        field: &'static str, column: &'static str, condition: Condition,
    ) -> Self {
        Self {
            field,
            column,
            condition,
        }
    }
}

/// Free-text term applied as a disjunction across `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub columns: &'static [&'static str],
    pub term: String,
}

/// Everything the backing store needs to produce one capped page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreQuery {
    pub filters: Vec<Filter>,
    pub search: Option<Search>,
    pub limit: usize,
}

impl StoreQuery {
    pub fn new(limit: usize) -> Self {
        Self {
            filters: Vec::new(),
            search: None,
            limit,
        }
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, search: Option<Search>) -> Self {
        self.search = search;
        self
    }

    pub fn filter(&self, field: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.field == field)
    }
}
