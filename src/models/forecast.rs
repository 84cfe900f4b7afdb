use std::fmt;
use std::fmt::Formatter;
use chrono::{NaiveDate, NaiveDateTime};
use crate::errors::InputError;

/// A validated location as entered by the user, ready to be sent to the forecast provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub country: String,
}

impl LocationQuery {
    /// Returns a validated location query
    ///
    /// Both fields are trimmed, the city must not be empty and the country code must be
    /// exactly two ASCII letters. The country code is normalized to upper case.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city
    /// * 'country' - two letter country code, case-insensitive
    pub fn new(city: &str, country: &str) -> Result<Self, InputError> {
        let city = city.trim();
        let country = country.trim();

        if city.is_empty() {
            return Err(InputError::EmptyCity);
        }
        if country.is_empty() {
            return Err(InputError::EmptyCountry);
        }
        if country.chars().count() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InputError::CountryCode(country.to_string()));
        }

        Ok(Self { city: city.to_string(), country: country.to_ascii_uppercase() })
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Location metadata as reported back by the forecast provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub country_code: String,
}

/// One 3-hour forecast sample
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub weather_category: String,
    pub temperature: f64,
    pub humidity: u8,
    pub rain_mm_3h: Option<f64>,
    pub snow_mm_3h: Option<f64>,
}

impl ForecastSample {
    /// Calendar date the sample belongs to
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Rain over the 3-hour slot, absent counts as zero
    pub fn rain(&self) -> f64 {
        self.rain_mm_3h.unwrap_or(0.0)
    }

    /// Snow over the 3-hour slot, absent counts as zero
    pub fn snow(&self) -> f64 {
        self.snow_mm_3h.unwrap_or(0.0)
    }
}

/// A full forecast period for one location, samples in chronological order
#[derive(Clone, Debug)]
pub struct Forecast {
    pub location: Location,
    pub samples: Vec<ForecastSample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_normalizes_country_code() {
        let query = LocationQuery::new(" Lyon ", "fr").unwrap();
        assert_eq!(query.city, "Lyon");
        assert_eq!(query.country, "FR");
        assert_eq!(query.to_string(), "Lyon, FR");
    }

    #[test]
    fn query_rejects_empty_fields() {
        assert!(matches!(LocationQuery::new("", "FR"), Err(InputError::EmptyCity)));
        assert!(matches!(LocationQuery::new("   ", "FR"), Err(InputError::EmptyCity)));
        assert!(matches!(LocationQuery::new("Lyon", ""), Err(InputError::EmptyCountry)));
    }

    #[test]
    fn query_rejects_bad_country_codes() {
        assert!(matches!(LocationQuery::new("Lyon", "FRA"), Err(InputError::CountryCode(_))));
        assert!(matches!(LocationQuery::new("Lyon", "F"), Err(InputError::CountryCode(_))));
        assert!(matches!(LocationQuery::new("Lyon", "F1"), Err(InputError::CountryCode(_))));
    }

    #[test]
    fn absent_precipitation_counts_as_zero() {
        let sample = ForecastSample {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            weather_category: "Clouds".to_string(),
            temperature: 4.5,
            humidity: 81,
            rain_mm_3h: None,
            snow_mm_3h: Some(0.4),
        };
        assert_eq!(sample.rain(), 0.0);
        assert_eq!(sample.snow(), 0.4);
        assert_eq!(sample.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
