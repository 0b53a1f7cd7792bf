use config::{Config, Environment, File};
use log::warn;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";
/// Largest page the catalog API serves
pub const MAX_PAGE_SIZE: u32 = 250;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Settings of the catalog provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtcgConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl Default for PtcgConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            page_size: MAX_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PtcgConfig {
    /// Load from `pokemontcg.toml` (optional) overlaid with `PTCG_*` variables
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from("pokemontcg")
    }

    pub fn load_from(file_stem: &str) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("PTCG"))
            .build()?;
        Self::from_config(&config)
    }

    /// Read settings out of an already built `config::Config`
    pub fn from_config(config: &Config) -> Result<Self, SettingsError> {
        let defaults = Self::default();

        let base_url = config
            .get_string("base_url")
            .unwrap_or(defaults.base_url);
        if url::Url::parse(&base_url).is_err() {
            return Err(SettingsError::InvalidValue {
                key: "base_url",
                message: format!("`{}` is not a URL", base_url),
            });
        }

        let api_key = config
            .get_string("api_key")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("Pokemon TCG API key not configured. Requests are rate limited");
        }

        let page_size = match config.get_int("page_size") {
            Ok(size) => u32::try_from(size)
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or_else(|| SettingsError::InvalidValue {
                    key: "page_size",
                    message: format!("{} is outside 1..={}", size, MAX_PAGE_SIZE),
                })?,
            Err(config::ConfigError::NotFound(_)) => defaults.page_size,
            Err(e) => return Err(e.into()),
        };

        let timeout_secs = match config.get_int("timeout_secs") {
            Ok(secs) if secs > 0 => secs as u64,
            Ok(secs) => {
                return Err(SettingsError::InvalidValue {
                    key: "timeout_secs",
                    message: format!("{} must be positive", secs),
                })
            }
            Err(config::ConfigError::NotFound(_)) => defaults.timeout_secs,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size,
            timeout_secs,
        })
    }
}
