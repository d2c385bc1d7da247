use chrono::{NaiveDate, NaiveDateTime};
use database_traits::{Condition, Scalar};

use crate::error::ParamError;

/// How a request value is coerced and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    /// Exact text match.
    Text,
    /// Case-insensitive equality.
    IExact,
    /// Case-insensitive substring.
    Contains,
    Flag,
    Date,
}

/// One filterable request field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub column: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(
        name: &'static str, column: &'static str, kind: FieldKind,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            column,
            kind,
        }
    }

    pub const fn int(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Int)
    }

    pub const fn float(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Float)
    }

    pub const fn text(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Text)
    }

    pub const fn iexact(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::IExact)
    }

    pub const fn contains(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Contains)
    }

    pub const fn flag(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Flag)
    }

    pub const fn date(name: &'static str, column: &'static str) -> Self {
        Self::new(name, column, FieldKind::Date)
    }

    pub const fn alias(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Request names accepted for this field, canonical name first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// `Ok(None)` for blank input.
    pub fn coerce(&self, raw: &str) -> Result<Option<Condition>, ParamError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let condition = match self.kind {
            FieldKind::Int => {
                let v = raw.parse::<i64>().map_err(|_| {
                    ParamError::invalid_value(self.name, "expected an integer")
                })?;
                Condition::Exact(Scalar::Int(v))
            }
            FieldKind::Float => {
                let v = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        ParamError::invalid_value(self.name, "expected a number")
                    })?;
                Condition::Exact(Scalar::Float(v))
            }
            FieldKind::Text => Condition::Exact(Scalar::Text(raw.to_string())),
            FieldKind::IExact => Condition::IExact(raw.to_string()),
            FieldKind::Contains => Condition::Contains(raw.to_string()),
            FieldKind::Flag => {
                let v = parse_bool(raw).ok_or_else(|| {
                    ParamError::invalid_value(self.name, "expected a boolean")
                })?;
                Condition::Flag(v)
            }
            FieldKind::Date => {
                let v = parse_date(raw).ok_or_else(|| {
                    ParamError::invalid_value(
                        self.name,
                        "expected a date (YYYY-MM-DD or MM/DD/YYYY)",
                    )
                })?;
                Condition::Exact(Scalar::Date(v))
            }
        };
        Ok(Some(condition))
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMP_ID: FieldDef = FieldDef::int("id", "ID").alias(&["emp_id"]);

    #[test]
    fn test_int_field_coerces_and_rejects() {
        assert_eq!(
            EMP_ID.coerce(" 42 ").unwrap(),
            Some(Condition::Exact(Scalar::Int(42)))
        );
        assert_eq!(EMP_ID.coerce("").unwrap(), None);
        assert_eq!(
            EMP_ID.coerce("forty-two").unwrap_err(),
            ParamError::invalid_value("id", "expected an integer")
        );
    }

    #[test]
    fn test_aliases_follow_canonical_name() {
        assert_eq!(EMP_ID.names().collect::<Vec<_>>(), vec!["id", "emp_id"]);
    }

    #[test]
    fn test_bool_spellings() {
        for raw in ["1", "true", "True", "YES", "on"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "False", "no", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 1);
        assert_eq!(parse_date("2024-07-01"), expected);
        assert_eq!(parse_date("07/01/2024"), expected);
        assert_eq!(parse_date("2024-07-01T08:30:00"), expected);
        assert_eq!(parse_date("July 1st"), None);
    }

    #[test]
    fn test_flag_and_float_errors_name_the_field() {
        let flag = FieldDef::flag("employed", "employed");
        assert!(matches!(
            flag.coerce("sometimes"),
            Err(ParamError::InvalidValue { field, .. }) if field == "employed"
        ));

        let hourly = FieldDef::float("hourly", "hourly");
        assert!(hourly.coerce("NaN").is_err());
        assert_eq!(
            hourly.coerce("17.5").unwrap(),
            Some(Condition::Exact(Scalar::Float(17.5)))
        );
    }
}
