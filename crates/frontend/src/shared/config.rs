use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base URL used by debug builds (local dev server)
    pub dev_base_url: String,
    /// Path appended to the page origin in release builds
    pub base_path: String,
    /// localStorage key whose value, when set, replaces the base URL
    #[serde(default)]
    pub override_storage_key: Option<String>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
dev_base_url = "http://localhost:2024/dashboard/api"
base_path = "/dashboard/api"
override_storage_key = "solar_api_base_url"
"#;

/// Base URL baked in at compile time, wins over the build mode defaults
pub const BASE_URL_ENV: Option<&str> = option_env!("SOLAR_API_BASE_URL");

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                dev_base_url: "http://localhost:2024/dashboard/api".to_string(),
                base_path: "/dashboard/api".to_string(),
                override_storage_key: Some("solar_api_base_url".to_string()),
            },
        }
    }
}

/// Which backend a build talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Parse the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded config, using defaults: {:#}", e);
        Config::default()
    }
});

pub fn config() -> &'static Config {
    &CONFIG
}
