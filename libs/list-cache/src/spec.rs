use std::borrow::Cow;

use database_traits::Filter;

use crate::{
    error::ParamError,
    fields::{FieldDef, parse_bool},
    params::ListParams,
};

/// Free-text narrowing term, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    /// `None` for a blank term.
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Self {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when any of `haystacks` contains the term.
    pub fn matches<'a, I>(&self, haystacks: I) -> bool
    where
        I: IntoIterator<Item = Cow<'a, str>>,
    {
        haystacks
            .into_iter()
            .any(|text| text.to_lowercase().contains(&self.needle))
    }
}

/// Typed filters, search term and paging extracted from one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    pub filters: Vec<Filter>,
    pub term: Option<SearchTerm>,
    pub limit: Option<usize>,
    pub count_only: bool,
}

impl QuerySpec {
    /// Coerces `params` against an entity's field table. The first
    /// non-blank name of each field wins, in declaration order.
    pub fn from_params(
        fields: &[FieldDef], params: &ListParams,
    ) -> Result<Self, ParamError> {
        let mut filters = Vec::new();
        for field in fields {
            let Some(raw) = field.names().find_map(|name| params.get(name))
            else {
                continue;
            };
            if let Some(condition) = field.coerce(raw)? {
                filters.push(Filter::new(field.name, field.column, condition));
            }
        }

        let limit = params
            .get_ignore_case("limit")
            .map(|raw| {
                raw.parse::<usize>().map_err(|_| {
                    ParamError::invalid_value(
                        "limit",
                        "expected a non-negative integer",
                    )
                })
            })
            .transpose()?;

        let count_only = params
            .get_ignore_case("count_only")
            .map(|raw| {
                parse_bool(raw).ok_or_else(|| {
                    ParamError::invalid_value("count_only", "expected a boolean")
                })
            })
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            filters,
            term: params.get_ignore_case("q").and_then(SearchTerm::new),
            limit,
            count_only,
        })
    }

    pub fn filter(&self, field: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.field == field)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}
