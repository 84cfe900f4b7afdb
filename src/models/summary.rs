use std::fmt;
use std::fmt::Formatter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::models::forecast::ForecastSample;

/// Aggregated figures for one calendar date of the forecast period
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DailySummary {
    #[serde(rename = "local_date")]
    pub date: NaiveDate,
    #[serde(rename = "rain_cumul_mm")]
    pub rain_total_mm: f64,
    #[serde(rename = "snow_cumul_mm")]
    pub snow_total_mm: f64,
    #[serde(rename = "major_transitions_count")]
    pub transition_count: usize,
    #[serde(skip)]
    pub samples: Vec<ForecastSample>,
}

/// The summary of a whole forecast period, this is what ends up in the result file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PeriodSummary {
    #[serde(rename = "forecast_location_name")]
    pub location_name: String,
    pub country_code: String,
    #[serde(rename = "total_rain_period_mm")]
    pub total_rain_mm: f64,
    #[serde(rename = "total_snow_period_mm")]
    pub total_snow_mm: f64,
    #[serde(rename = "max_humidity_period")]
    pub max_humidity: u8,
    #[serde(rename = "forecast_details")]
    pub daily_summaries: Vec<DailySummary>,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for PeriodSummary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Location: {}, {}", self.location_name, self.country_code)?;
        writeln!(f, "Rainfall total (5 days): {} mm", self.total_rain_mm)?;
        writeln!(f, "Snowfall total (5 days): {} mm", self.total_snow_mm)?;
        writeln!(f, "Maximum humidity: {}%", self.max_humidity)?;
        write!(f, "Number of days analyzed: {}", self.daily_summaries.len())
    }
}
