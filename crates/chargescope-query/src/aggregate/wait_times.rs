//! Daily wait-time series with rolling mean, anomaly flags, and event
//! markers.

use std::collections::BTreeMap;

use chargescope_storage::Dataset;
use chargescope_types::{EventMarker, FilterSelection, Session};
use chrono::NaiveDate;
use serde::Serialize;

use crate::stats;

/// Width of the trailing rolling-mean window, in series entries.
pub const ROLLING_WINDOW: usize = 7;

/// A day is anomalous when its mean deviates from the rolling mean by
/// more than this many standard deviations of the whole series.
pub const ANOMALY_SIGMA: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitTimePoint {
    pub date: NaiveDate,
    pub sessions: u64,
    pub mean_wait: f64,
    /// Trailing mean over this and the six preceding entries; `None` for
    /// the first six entries of the series.
    pub rolling_mean: Option<f64>,
    pub anomaly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitTimeSeries {
    pub points: Vec<WaitTimePoint>,
    /// Event markers whose date falls inside the selection's range.
    pub events: Vec<EventMarker>,
}

/// Mean wait per calendar day, ordered by day, with the trailing rolling
/// mean and anomaly flags attached.
pub fn wait_time_series(
    dataset: &Dataset,
    subset: &[&Session],
    selection: &FilterSelection,
) -> WaitTimeSeries {
    let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for session in subset {
        by_day.entry(session.day()).or_default().push(session.wait_minutes);
    }

    let daily: Vec<(NaiveDate, u64, f64)> = by_day
        .into_iter()
        .map(|(date, waits)| (date, waits.len() as u64, stats::mean(&waits)))
        .collect();
    let means: Vec<f64> = daily.iter().map(|(_, _, m)| *m).collect();
    let sigma = stats::sample_stddev(&means);

    let mut points = Vec::with_capacity(daily.len());
    for (k, (date, sessions, mean_wait)) in daily.into_iter().enumerate() {
        let rolling_mean = if k + 1 >= ROLLING_WINDOW {
            Some(stats::mean(&means[k + 1 - ROLLING_WINDOW..=k]))
        } else {
            None
        };
        let anomaly =
            rolling_mean.is_some_and(|rolling| (mean_wait - rolling).abs() > ANOMALY_SIGMA * sigma);
        points.push(WaitTimePoint { date, sessions, mean_wait, rolling_mean, anomaly });
    }

    let events =
        dataset.events.iter().filter(|e| selection.contains_day(e.date)).cloned().collect();

    WaitTimeSeries { points, events }
}
