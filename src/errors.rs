use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::manager_open_weather::errors::OpenWeatherError;

pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError({:?})", self.0)
    }
}
impl std::error::Error for ConfigError {}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for ConfigError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<log::SetLoggerError> for ConfigError {
    fn from(e: log::SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}

/// Invalid location input, either from the user or from the forecast provider's metadata
#[derive(Error, Debug)]
pub enum InputError {
    #[error("you must enter a city")]
    EmptyCity,
    #[error("you must enter a country code")]
    EmptyCountry,
    #[error("the country code must be 2 letters, got '{0}'")]
    CountryCode(String),
    #[error("location metadata is missing {0}")]
    MissingLocation(&'static str),
    #[error("unable to read input: {0}")]
    Prompt(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("unable to serialize result: {0}")]
    Document(#[from] serde_json::Error),
    #[error("unable to write result file '{path}': {source}")]
    Write { path: String, source: std::io::Error },
}

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Forecast(#[from] OpenWeatherError),
}
