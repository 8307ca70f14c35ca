use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

lazy_static! {
    pub static ref ENDPOINTS: Endpoints = Endpoints::from_env();
}

/// Base URLs and model used by the API clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub youtube_api_url: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            youtube_api_url: DEFAULT_YOUTUBE_API_URL.to_string(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            youtube_api_url: get_env_var("YOUTUBE_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.youtube_api_url),
            gemini_api_url: get_env_var("GEMINI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_url),
            gemini_model: get_env_var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
        }
    }
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::debug!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string().filter(|v| !v.is_empty())
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "TubeTrend Expert".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
