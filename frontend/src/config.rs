use crate::env_variable_utils::{get_build_var, get_env_var};
use lazy_static::lazy_static;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_APP_NAME: &str = "YouTube Clip Search";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;
pub const DEFAULT_MAX_RESULTS: u32 = 5;
// Range accepted by the backend for `max_results`.
const MAX_RESULTS_RANGE: (u32, u32) = (1, 10);

lazy_static! {
    pub static ref CONFIG: AppConfig =
        AppConfig::from_lookup(|key| get_env_var(key).or_else(|| get_build_var(key)));
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base for every backend call, without a trailing slash. Either absolute
    /// (`http://localhost:8001`) or a reverse-proxied prefix (`/api`).
    pub backend_url: String,
    pub app_name: String,
    pub debug_mode: bool,
    pub request_timeout_ms: u32,
    pub max_results: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            debug_mode: false,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.backend_url);

        let app_name = lookup("APP_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.app_name);

        let debug_mode = parse_or("DEBUG_MODE", lookup("DEBUG_MODE"), defaults.debug_mode);

        let request_timeout_ms = parse_or(
            "REQUEST_TIMEOUT_MS",
            lookup("REQUEST_TIMEOUT_MS"),
            defaults.request_timeout_ms,
        )
        .max(1);

        let max_results = parse_or("MAX_RESULTS", lookup("MAX_RESULTS"), defaults.max_results)
            .clamp(MAX_RESULTS_RANGE.0, MAX_RESULTS_RANGE.1);

        Self {
            backend_url,
            app_name,
            debug_mode,
            request_timeout_ms,
            max_results,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("Ignoring malformed value {:?} for '{}'", raw, key);
            default
        }
    }
}
