pub mod errors;

use std::time::Duration;
use chrono::NaiveDateTime;
use log::{debug, info};
use ureq::Agent;
use crate::config::{ApiKey, OpenWeatherParameters};
use crate::manager_open_weather::errors::OpenWeatherError;
use crate::models::forecast::{Forecast, ForecastSample, Location, LocationQuery};
use crate::models::open_weather_forecast::{FullForecast, ListEntry};

/// Format of the `dt_txt` field in forecast entries
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Anything that can produce a forecast period for a location
pub trait ForecastSource {
    fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, OpenWeatherError>;
}

/// Struct for fetching 5 day / 3 hour forecasts from OpenWeatherMap
pub struct OpenWeather {
    agent: Agent,
    api_key: ApiKey,
    base_url: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'config' - OpenWeatherMap endpoint and timeout configuration
    /// * 'api_key' - the API key to authenticate with
    pub fn new(config: &OpenWeatherParameters, api_key: ApiKey) -> OpenWeather {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        let agent = agent_config.into();

        Self { agent, api_key, base_url: config.base_url.trim_end_matches('/').to_string() }
    }
}

impl ForecastSource for OpenWeather {
    /// Retrieves the forecast for the given location in metric units.
    ///
    /// Any non-2xx status or transport problem ends up as a FetchFailure, a body that
    /// isn't the expected document ends up as a MalformedResponse.
    ///
    /// # Arguments
    ///
    /// * 'query' - the validated city and country code
    fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, OpenWeatherError> {
        let url = format!("{}/forecast", self.base_url);
        info!("Retrieving forecast for {} from {}", query, url);

        let json = self.agent
            .get(url.as_str())
            .query("q", format!("{},{}", query.city, query.country))
            .query("appid", self.api_key.expose())
            .query("units", "metric")
            .call()?
            .body_mut()
            .read_to_string()?;

        debug!("Received {} bytes of forecast data", json.len());

        parse_forecast(&json)
    }
}

/// Parses a forecast document into a domain forecast
///
/// # Arguments
///
/// * 'json' - the raw response body
pub fn parse_forecast(json: &str) -> Result<Forecast, OpenWeatherError> {
    let full: FullForecast = serde_json::from_str(json)?;

    let samples = full.list
        .into_iter()
        .map(to_sample)
        .collect::<Result<Vec<ForecastSample>, OpenWeatherError>>()?;

    Ok(Forecast {
        location: Location { name: full.city.name, country_code: full.city.country },
        samples,
    })
}

/// Converts one wire entry to a forecast sample
///
/// # Arguments
///
/// * 'entry' - list entry from the forecast document
fn to_sample(entry: ListEntry) -> Result<ForecastSample, OpenWeatherError> {
    let timestamp = NaiveDateTime::parse_from_str(&entry.dt_txt, DT_TXT_FORMAT)
        .map_err(|e| OpenWeatherError::MalformedResponse(format!("bad dt_txt '{}': {}", entry.dt_txt, e)))?;

    let weather_category = entry.weather
        .into_iter()
        .next()
        .map(|w| w.main)
        .ok_or_else(|| OpenWeatherError::MalformedResponse(format!("no weather for {}", entry.dt_txt)))?;

    Ok(ForecastSample {
        timestamp,
        weather_category,
        temperature: entry.main.temp,
        humidity: entry.main.humidity,
        rain_mm_3h: entry.rain.and_then(|r| r.three_hours),
        snow_mm_3h: entry.snow.and_then(|s| s.three_hours),
    })
}
