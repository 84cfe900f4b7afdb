use crate::models::forecast::ForecastSample;

/// Temperature change (°C) that has to be exceeded, together with a change of weather
/// category, for two consecutive samples to count as a major transition
pub const TRANSITION_TEMP_DELTA: f64 = 3.0;

/// Counts major weather transitions within one day's chronologically ordered samples.
///
/// A transition is counted between two adjacent samples when the weather category differs
/// and the temperature has changed strictly more than TRANSITION_TEMP_DELTA. Only the
/// given samples are compared, so a day is never compared against the next one.
///
/// # Arguments
///
/// * 'samples' - samples belonging to a single date, in time order
pub fn count_major_transitions(samples: &[ForecastSample]) -> usize {
    samples
        .windows(2)
        .filter(|pair| is_major_transition(&pair[0], &pair[1]))
        .count()
}

fn is_major_transition(current: &ForecastSample, next: &ForecastSample) -> bool {
    current.weather_category != next.weather_category
        && (next.temperature - current.temperature).abs() > TRANSITION_TEMP_DELTA
}
