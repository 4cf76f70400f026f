use crate::fetch::FetchError;
use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_DETAIL_HISTORY_LIMIT: u32 = 30;
pub const DEFAULT_MODAL_HISTORY_LIMIT: u32 = 60;

lazy_static! {
    pub static ref API_BASE_URL: Option<String> =
        get_env_var("API_BASE_URL").and_then(|raw| normalize_base_url(&raw));
    pub static ref DETAIL_HISTORY_LIMIT: u32 =
        parse_limit(get_env_var("DETAIL_HISTORY_LIMIT"), DEFAULT_DETAIL_HISTORY_LIMIT);
    pub static ref MODAL_HISTORY_LIMIT: u32 =
        parse_limit(get_env_var("MODAL_HISTORY_LIMIT"), DEFAULT_MODAL_HISTORY_LIMIT);
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

/// Returns the configured API base URL, or a configuration error when
/// `API_BASE_URL` is missing or blank. No request may be made without it.
pub fn get_api_base_url() -> Result<String, FetchError> {
    API_BASE_URL.clone().ok_or_else(|| {
        FetchError::Config("API base URL is not configured (set API_BASE_URL in env.js)".into())
    })
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Shorts Insight".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_limit(raw: Option<String>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(default)
}
