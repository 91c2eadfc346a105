//! Command implementations for the roster collector

pub mod collect_rosters;

use crate::{nerd::http::NERD_BASE_URL, BASE_URL_ENV_VAR};


/// Resolve the API host: explicit value, then `NBA_ROSTERS_BASE_URL`, then
/// the public host. A trailing `/` is dropped.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    let non_blank = |url: &String| !url.trim().is_empty();
    base_url
        .filter(non_blank)
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok().filter(non_blank))
        .unwrap_or_else(|| NERD_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}
