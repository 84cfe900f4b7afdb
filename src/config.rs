use std::{env, fmt, fs};
use std::fmt::Formatter;
use std::path::Path;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

/// Environment variable that, when set, overrides any API key in the configuration
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// OpenWeatherMap API key, never printed in clear text
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: &str) -> Self {
        ApiKey(key.trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

#[derive(Deserialize)]
pub struct OpenWeatherParameters {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    pub api_key: Option<String>,
    pub api_key_file: Option<String>,
}

#[derive(Deserialize)]
pub struct Files {
    #[serde(default = "default_result_file")]
    pub result_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub open_weather: OpenWeatherParameters,
    pub files: Files,
    pub general: General,
}

/// Legacy key file format, i.e. `{"API_KEY": "..."}`
#[derive(Deserialize)]
struct KeyFile {
    #[serde(rename = "API_KEY")]
    api_key: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_result_file() -> String {
    "result.json".to_string()
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}

/// Resolves the API key to use.
///
/// The environment variable wins over a key given directly in the configuration,
/// which in turn wins over a key file.
///
/// # Arguments
///
/// * 'config' - the open weather part of the configuration
/// * 'env_key' - value of the API key environment variable, if any
pub fn resolve_api_key(config: &OpenWeatherParameters, env_key: Option<String>) -> Result<ApiKey, ConfigError> {
    let key = if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
        ApiKey::new(&key)
    } else if let Some(key) = config.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
        ApiKey::new(key)
    } else if let Some(file) = &config.api_key_file {
        load_key_file(file)?
    } else {
        return Err(ConfigError::from("no API key configured"));
    };

    if key.expose().is_empty() {
        Err(ConfigError::from("API key is empty"))
    } else {
        Ok(key)
    }
}

/// Reads the API key from the environment
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_ENV).ok()
}

/// Loads an API key from a JSON key file
///
/// # Arguments
///
/// * 'key_path' - path to the key file
fn load_key_file(key_path: &str) -> Result<ApiKey, ConfigError> {
    let path = Path::new(key_path);
    if path.exists() {
        let json = fs::read_to_string(path)?;
        let key_file: KeyFile = serde_json::from_str(&json)?;

        Ok(ApiKey::new(&key_file.api_key))
    } else {
        Err(ConfigError::from("API key file not found"))
    }
}
