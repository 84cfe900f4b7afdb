use std::collections::HashMap;
use chrono::NaiveDate;
use log::debug;
use crate::errors::InputError;
use crate::models::forecast::{Forecast, ForecastSample};
use crate::models::summary::{DailySummary, PeriodSummary};
use crate::transitions::count_major_transitions;

/// Accumulator for one calendar date, totals kept at full precision
struct DayBucket {
    date: NaiveDate,
    rain: f64,
    snow: f64,
    samples: Vec<ForecastSample>,
}

impl DayBucket {
    fn new(date: NaiveDate) -> Self {
        Self { date, rain: 0.0, snow: 0.0, samples: Vec::new() }
    }

    fn add_sample(&mut self, sample: ForecastSample) {
        self.rain += sample.rain();
        self.snow += sample.snow();
        self.samples.push(sample);
    }

    fn finalize(self) -> DailySummary {
        let transition_count = count_major_transitions(&self.samples);

        DailySummary {
            date: self.date,
            rain_total_mm: round_one_decimal(self.rain),
            snow_total_mm: round_one_decimal(self.snow),
            transition_count,
            samples: self.samples,
        }
    }
}

/// Summarizes a forecast period into daily figures and period totals.
///
/// Samples are grouped by the date part of their timestamp, days keep the order in which
/// they were first seen. Rain and snow are accumulated unrounded and only rounded to one
/// decimal when the summary is produced. Transitions are counted per day once all samples
/// have been grouped.
///
/// # Arguments
///
/// * 'forecast' - location metadata and chronologically ordered samples
pub fn summarize(forecast: Forecast) -> Result<PeriodSummary, InputError> {
    let location = forecast.location;
    if location.name.trim().is_empty() {
        return Err(InputError::MissingLocation("location name"));
    }
    if location.country_code.trim().is_empty() {
        return Err(InputError::MissingLocation("country code"));
    }

    let mut days: Vec<DayBucket> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut total_rain = 0.0;
    let mut total_snow = 0.0;
    let mut max_humidity: u8 = 0;

    for sample in forecast.samples {
        total_rain += sample.rain();
        total_snow += sample.snow();
        if sample.humidity > max_humidity {
            max_humidity = sample.humidity;
        }

        let date = sample.date();
        let i = *index.entry(date).or_insert_with(|| {
            days.push(DayBucket::new(date));
            days.len() - 1
        });
        days[i].add_sample(sample);
    }

    let daily_summaries = days
        .into_iter()
        .map(DayBucket::finalize)
        .collect::<Vec<DailySummary>>();

    debug!("Summarized {} days for {}", daily_summaries.len(), location.name);

    Ok(PeriodSummary {
        location_name: location.name,
        country_code: location.country_code,
        total_rain_mm: round_one_decimal(total_rain),
        total_snow_mm: round_one_decimal(total_snow),
        max_humidity,
        daily_summaries,
    })
}

/// Rounds to one decimal.
///
/// Rounding goes through the decimal formatting of the exact binary value, with exact
/// halves going to even, so 0.15 (stored as 0.1499...) becomes 0.1 and 1.25 becomes 1.2.
///
/// # Arguments
///
/// * 'value' - value to round
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse::<f64>().unwrap_or(value)
}
