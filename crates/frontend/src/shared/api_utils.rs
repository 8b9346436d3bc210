//! API base URL resolution
//!
//! The base URL is computed on every request so a changed localStorage
//! override takes effect without reloading the page.

use crate::shared::config::{self, ApiConfig, BuildMode};

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. localStorage override (key from config), if non-empty
/// 2. `SOLAR_API_BASE_URL` set at compile time
/// 3. build mode default, see [`resolve_base_url`]
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/projects/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let api = &config::config().api;

    if let Some(url) = stored_override(api) {
        return normalize(&url);
    }

    if let Some(url) = config::BASE_URL_ENV.filter(|url| !url.is_empty()) {
        return normalize(url);
    }

    resolve_base_url(api, BuildMode::current(), window_origin().as_deref())
}

/// Base URL for a build mode
///
/// Development talks to the local dev server directly. Production uses the
/// page origin plus `base_path`, or the bare path when no origin is known.
pub fn resolve_base_url(api: &ApiConfig, mode: BuildMode, origin: Option<&str>) -> String {
    match mode {
        BuildMode::Development => normalize(&api.dev_base_url),
        BuildMode::Production => match origin {
            Some(origin) => normalize(&format!("{}{}", origin.trim_end_matches('/'), api.base_path)),
            None => normalize(&api.base_path),
        },
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn stored_override(api: &ApiConfig) -> Option<String> {
    let key = api.override_storage_key.as_deref()?;
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(key)
        .ok()?
        .filter(|value| !value.trim().is_empty())
}
