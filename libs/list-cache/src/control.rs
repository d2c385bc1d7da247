use crate::{error::ParamError, fields::parse_bool, params::ListParams};

/// Client freshness directives for one list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub force_refresh: bool,
}

impl CacheControl {
    pub const fn refresh() -> Self {
        Self {
            force_refresh: true,
        }
    }

    /// The header wins over a `cache-control` request field; either one,
    /// or a truthy `refresh` field, forces a fresh fetch.
    pub fn from_params(params: &ListParams) -> Result<Self, ParamError> {
        let directives = params
            .cache_control_header()
            .or_else(|| params.get_ignore_case("cache-control"));
        let mut force_refresh = directives.is_some_and(forces_refresh);

        if let Some(raw) = params.get_ignore_case("refresh") {
            let flag = parse_bool(raw).ok_or_else(|| {
                ParamError::invalid_value("refresh", "expected a boolean")
            })?;
            force_refresh |= flag;
        }

        Ok(Self { force_refresh })
    }
}

fn forces_refresh(directives: &str) -> bool {
    directives.split(',').map(str::trim).any(|directive| {
        if directive.eq_ignore_ascii_case("no-cache") {
            return true;
        }
        let Some((name, value)) = directive.split_once('=') else {
            return false;
        };
        name.trim().eq_ignore_ascii_case("max-age")
            && value.trim().trim_matches('"').parse::<u64>() == Ok(0)
    })
}
