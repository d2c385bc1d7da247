use std::fmt;

use crate::spec::QuerySpec;

/// Maps one identifying field to the segment it contributes to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySelector {
    pub field: &'static str,
    pub segment: &'static str,
}

impl KeySelector {
    pub const fn new(field: &'static str, segment: &'static str) -> Self {
        Self { field, segment }
    }

    /// Selector whose segment is the field name itself.
    pub const fn field(field: &'static str) -> Self {
        Self::new(field, field)
    }
}

/// Per-entity cache key derivation: a namespace, a version and an
/// ordered list of identifying fields. The first field present in the
/// request picks the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPlan {
    pub namespace: &'static str,
    pub version: u32,
    pub selectors: &'static [KeySelector],
}

impl KeyPlan {
    pub const fn new(
        namespace: &'static str, version: u32,
        selectors: &'static [KeySelector],
    ) -> Self {
        Self {
            namespace,
            version,
            selectors,
        }
    }

    pub fn prefix(&self) -> String {
        format!("{}_v{}", self.namespace, self.version)
    }

    pub fn all_key(&self) -> CacheKey {
        CacheKey(format!("{}_all", self.prefix()))
    }

    /// Set under which every key written for the entity is registered.
    pub fn tag(&self) -> String {
        format!("{}_keys", self.prefix())
    }

    /// `None` when the request carries a structural filter other than
    /// the selected key field. Such requests neither read nor write the
    /// cache.
    pub fn derive(&self, spec: &QuerySpec) -> Option<CacheKey> {
        let selected = self.selectors.iter().find_map(|selector| {
            spec.filter(selector.field).map(|filter| (selector, filter))
        });

        match selected {
            Some((selector, filter)) => {
                let only_key_field =
                    spec.filters.iter().all(|f| f.field == selector.field);
                only_key_field.then(|| {
                    CacheKey(format!(
                        "{}_{}_{}",
                        self.prefix(),
                        selector.segment,
                        filter.condition.key_value()
                    ))
                })
            }
            None => spec.filters.is_empty().then(|| self.all_key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use database_traits::{Condition, Filter, Scalar};

    use super::*;

    const INVOICES: KeyPlan = KeyPlan::new("accounting_invoice_history", 1, &[
        KeySelector::field("uid"),
        KeySelector::field("task_id"),
        KeySelector::field("invoice_number"),
        KeySelector::new("emp_id", "emp"),
        KeySelector::field("cust_id"),
        KeySelector::field("company"),
    ]);

    fn spec(filters: Vec<Filter>) -> QuerySpec {
        QuerySpec {
            filters,
            ..QuerySpec::default()
        }
    }

    fn int(field: &'static str, v: i64) -> Filter {
        Filter::new(field, field, Condition::Exact(Scalar::Int(v)))
    }

    #[test]
    fn test_no_filters_uses_all_key() {
        assert_eq!(
            INVOICES.derive(&QuerySpec::default()),
            Some(INVOICES.all_key())
        );
        assert_eq!(
            INVOICES.all_key().as_str(),
            "accounting_invoice_history_v1_all"
        );
    }

    #[test]
    fn test_single_identifier_picks_its_segment() {
        let key = INVOICES.derive(&spec(vec![int("emp_id", 42)])).unwrap();
        assert_eq!(key.as_str(), "accounting_invoice_history_v1_emp_42");
    }

    #[test]
    fn test_case_insensitive_values_fold() {
        let filter = Filter::new(
            "company",
            "Company",
            Condition::Contains("ACME".into()),
        );
        let key = INVOICES.derive(&spec(vec![filter])).unwrap();
        assert_eq!(key.to_string(), "accounting_invoice_history_v1_company_acme");
    }

    #[test]
    fn test_extra_structural_filter_is_not_cacheable() {
        let filters = vec![
            int("cust_id", 7),
            Filter::new("company", "Company", Condition::Contains("acme".into())),
        ];
        assert_eq!(INVOICES.derive(&spec(filters)), None);

        let filters = vec![Filter::new(
            "route",
            "Route",
            Condition::IExact("r1".into()),
        )];
        assert_eq!(INVOICES.derive(&spec(filters)), None);
    }

    #[test]
    fn test_search_term_does_not_change_key() {
        let plain = spec(vec![int("uid", 3)]);
        let searched = QuerySpec {
            term: crate::spec::SearchTerm::new("acme"),
            ..plain.clone()
        };
        assert_eq!(INVOICES.derive(&plain), INVOICES.derive(&searched));
    }

    #[test]
    fn test_tag_shares_prefix() {
        assert_eq!(INVOICES.tag(), "accounting_invoice_history_v1_keys");
    }
}
