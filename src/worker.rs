use log::{error, info};
use crate::aggregation::summarize;
use crate::errors::{DigestError, PersistError};
use crate::manager_open_weather::ForecastSource;
use crate::models::forecast::LocationQuery;
use crate::models::summary::PeriodSummary;
use crate::persist::save_period_summary;

/// Result of a completed run. The summary is valid even if it couldn't be saved.
pub struct DigestOutcome {
    pub summary: PeriodSummary,
    pub persist_error: Option<PersistError>,
}

/// Fetches, summarizes and saves the forecast for one location.
///
/// A failing fetch or bad location metadata aborts the run before anything is written,
/// while a failing save is only logged and handed back with the summary.
///
/// # Arguments
///
/// * 'source' - where to get the forecast from
/// * 'query' - the validated location
/// * 'result_file' - file to save the summary to
pub fn run<S: ForecastSource>(source: &S, query: &LocationQuery, result_file: &str) -> Result<DigestOutcome, DigestError> {
    let forecast = source.get_forecast(query).inspect_err(|e| error!("Unable to retrieve forecast for {}: {}", query, e))?;
    info!("Retrieved {} forecast samples, processing", forecast.samples.len());

    let summary = summarize(forecast)?;

    let persist_error = match save_period_summary(result_file, &summary) {
        Ok(()) => {
            info!("File '{}' created", result_file);
            None
        },
        Err(e) => {
            error!("Error during saving: {}", e);
            Some(e)
        },
    };

    Ok(DigestOutcome { summary, persist_error })
}
