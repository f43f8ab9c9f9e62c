use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "CGM_API_BASE_URL";

/// Load the configuration once and return it. Later calls return the same
/// value.
///
/// Native builds read `.env` and `config.toml`, then apply
/// [`BASE_URL_ENV`]. Browser builds point the API at the page's own origin.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(read_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
            AppConfig::default()
        }
    };

    let config = apply_env_override(config, std::env::var(BASE_URL_ENV).ok().as_deref());
    tracing::info!(base_url = %config.api.base_url, "API configuration loaded");
    config
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    match origin {
        Some(origin) => AppConfig::default().with_base_url(&origin),
        None => AppConfig::default(),
    }
}

/// Parse `config.toml` contents. Unparseable input yields the defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => {
            let base_url = config.api.base_url.clone();
            config.with_base_url(&base_url)
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
            AppConfig::default()
        }
    }
}

/// Apply a base URL override when one is set and non-blank.
pub fn apply_env_override(config: AppConfig, base_url: Option<&str>) -> AppConfig {
    match base_url {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}
