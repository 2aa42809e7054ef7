//! Busiest-station ranking.

use std::collections::BTreeMap;

use chargescope_storage::Dataset;
use chargescope_types::Session;
use serde::Serialize;

/// How many stations the ranking keeps.
pub const TOP_STATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationCount {
    pub station_id: String,
    pub station_name: String,
    pub sessions: u64,
}

/// Top stations by session count, descending. Ties break by station id
/// ascending so the ranking is identical across runs.
pub fn busiest_stations(dataset: &Dataset, subset: &[&Session]) -> Vec<StationCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for session in subset {
        *counts.entry(session.station_id.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<StationCount> = counts
        .into_iter()
        .map(|(station_id, sessions)| StationCount {
            station_id: station_id.to_string(),
            station_name: dataset
                .station(station_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| station_id.to_string()),
            sessions,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.sessions.cmp(&a.sessions).then_with(|| a.station_id.cmp(&b.station_id))
    });
    ranked.truncate(TOP_STATIONS);
    ranked
}
