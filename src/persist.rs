use std::fs;
use crate::errors::PersistError;
use crate::models::summary::PeriodSummary;

/// Saves a period summary as pretty printed JSON
///
/// # Arguments
///
/// * 'file_path' - the file to write to, any existing file is replaced
/// * 'summary' - the summary to save
pub fn save_period_summary(file_path: &str, summary: &PeriodSummary) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(summary)?;

    fs::write(file_path, json)
        .map_err(|e| PersistError::Write { path: file_path.to_string(), source: e })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;
    use crate::models::summary::DailySummary;

    fn load_period_summary(file_path: &str) -> PeriodSummary {
        let json = fs::read_to_string(file_path).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    fn summary() -> PeriodSummary {
        PeriodSummary {
            location_name: "Zürich".to_string(),
            country_code: "CH".to_string(),
            total_rain_mm: 4.7,
            total_snow_mm: 1.3,
            max_humidity: 97,
            daily_summaries: vec![
                DailySummary {
                    date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
                    rain_total_mm: 0.0,
                    snow_total_mm: 1.3,
                    transition_count: 2,
                    samples: Vec::new(),
                },
                DailySummary {
                    date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                    rain_total_mm: 4.7,
                    snow_total_mm: 0.0,
                    transition_count: 0,
                    samples: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn writes_indented_unescaped_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.json");
        let path = path.to_str().unwrap();

        save_period_summary(path, &summary()).unwrap();
        let json = fs::read_to_string(path).unwrap();

        assert!(json.starts_with("{\n  \"forecast_location_name\": \"Zürich\""));
        assert!(json.contains("\n  \"forecast_details\": [\n    {\n      \"local_date\": \"2025-01-14\""));
    }

    #[test]
    fn saved_summary_reads_back_the_same() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.json");
        let path = path.to_str().unwrap();

        save_period_summary(path, &summary()).unwrap();
        let loaded = load_period_summary(path);

        assert_eq!(loaded, summary());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("result.json");

        let result = save_period_summary(path.to_str().unwrap(), &summary());
        assert!(matches!(result, Err(PersistError::Write { .. })));
    }
}
