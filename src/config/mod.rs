#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::SourceKind;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{
    validate_api_base, validate_apod_count, validate_images_dir, Validate,
};
use std::env;

pub const DEFAULT_SPACEX_API_BASE: &str = "https://api.spacexdata.com";
pub const DEFAULT_NASA_API_BASE: &str = "https://api.nasa.gov";
pub const DEFAULT_IMAGES_DIR: &str = "images";

pub const FLIGHT_ID_VAR: &str = "FLIGHT_ID";
pub const NASA_API_TOKEN_VAR: &str = "NASA_API_TOKEN";
pub const SPACEX_API_BASE_VAR: &str = "SPACEX_API_BASE";
pub const NASA_API_BASE_VAR: &str = "NASA_API_BASE";

/// Process-wide settings, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub flight_id: String,
    pub nasa_api_token: String,
    pub images_dir: String,
    pub sources: Vec<SourceKind>,
    pub apod_count: Option<usize>,
    pub spacex_api_base: String,
    pub nasa_api_base: String,
}

impl AppConfig {
    /// 從環境變數載入配置 (呼叫前可先用 dotenvy 讀取 .env)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| FetchError::MissingConfigError {
                field: key.to_string(),
            })
        };

        Ok(Self {
            flight_id: required(FLIGHT_ID_VAR)?,
            nasa_api_token: required(NASA_API_TOKEN_VAR)?,
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            sources: SourceKind::ALL.to_vec(),
            apod_count: None,
            spacex_api_base: get(SPACEX_API_BASE_VAR)
                .unwrap_or_else(|| DEFAULT_SPACEX_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            nasa_api_base: get(NASA_API_BASE_VAR)
                .unwrap_or_else(|| DEFAULT_NASA_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn with_sources(mut self, sources: Vec<SourceKind>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_apod_count(mut self, apod_count: Option<usize>) -> Self {
        self.apod_count = apod_count;
        self
    }

    pub fn with_images_dir(mut self, images_dir: impl Into<String>) -> Self {
        self.images_dir = images_dir.into();
        self
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_images_dir(&self.images_dir)?;
        validate_api_base("spacex_api_base", &self.spacex_api_base)?;
        validate_api_base("nasa_api_base", &self.nasa_api_base)?;
        validate_apod_count(self.apod_count)?;

        if self.sources.is_empty() {
            return Err(FetchError::ConfigError {
                message: "At least one source must be selected".to_string(),
            });
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
