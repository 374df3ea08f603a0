use crate::domain::error::AppError;
use crate::infrastructure::providers::{libretranslate, lingva, mymemory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_rtl_marks")]
    pub rtl_marks: bool,
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub providers: Providers,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Provider order is fixed; only endpoints and on/off are configurable
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Providers {
    #[serde(default = "default_lingva")]
    pub lingva: ProviderConfig,
    #[serde(default = "default_mymemory")]
    pub mymemory: ProviderConfig,
    #[serde(default = "default_libretranslate")]
    pub libretranslate: ProviderConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_enable")]
    pub enabled: bool,
    /// Falls back to the provider's public endpoint when omitted
    pub base_url: Option<String>,
    /// MyMemory only
    pub email: Option<String>,
    /// LibreTranslate only
    pub api_key: Option<String>,
}

impl ProviderConfig {
    fn with_base_url(base_url: &str) -> Self {
        Self {
            enabled: true,
            base_url: Some(base_url.to_string()),
            email: None,
            api_key: None,
        }
    }

    pub fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(default)
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            lingva: default_lingva(),
            mymemory: default_mymemory(),
            libretranslate: default_libretranslate(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            timeout_secs: default_timeout_secs(),
            theme: default_theme(),
            rtl_marks: default_rtl_marks(),
            http_proxy: None,
            logging: Logging::default(),
            providers: Providers::default(),
        }
    }
}

// Defaults
fn default_target_language() -> String {
    "en".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_theme() -> String {
    "default".to_string()
}
fn default_rtl_marks() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_lingva() -> ProviderConfig {
    ProviderConfig::with_base_url(lingva::DEFAULT_BASE_URL)
}
fn default_mymemory() -> ProviderConfig {
    ProviderConfig::with_base_url(mymemory::DEFAULT_BASE_URL)
}
fn default_libretranslate() -> ProviderConfig {
    ProviderConfig::with_base_url(libretranslate::DEFAULT_BASE_URL)
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("transchain").join("config.toml"))
}

/// Parse a config document; missing fields take their defaults.
pub fn parse_config(content: &str) -> Result<Config, AppError> {
    let config: Config = toml::from_str(content)?;
    if config.timeout_secs == 0 {
        return Err(AppError::Config("timeout_secs must be at least 1".to_string()));
    }
    Ok(config)
}

pub fn load_config() -> Result<Config, AppError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<(), AppError> {
    let path = get_config_path()
        .ok_or_else(|| AppError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    write_config_sample(&path)?;
    println!("Generated config file at: {}", path.display());
    Ok(())
}

pub fn write_config_sample(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(())
}
