//! Per-station utilization rollup feeding the network map.

use std::collections::BTreeMap;

use chargescope_storage::Dataset;
use chargescope_types::Session;
use serde::Serialize;

use crate::stats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationRow {
    pub station_id: String,
    pub station_name: String,
    pub lat: f64,
    pub lon: f64,
    pub sessions: u64,
    pub mean_wait: f64,
}

/// Session count and mean wait per station, joined with the station's
/// coordinates. Stations without sessions in the subset are omitted;
/// rows are ordered by station id.
pub fn utilization_rollup(dataset: &Dataset, subset: &[&Session]) -> Vec<UtilizationRow> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for session in subset {
        groups.entry(session.station_id.as_str()).or_default().push(session.wait_minutes);
    }

    groups
        .into_iter()
        .filter_map(|(station_id, waits)| {
            // The map needs coordinates; a session pointing at an unknown
            // station has nowhere to be drawn.
            let station = dataset.station(station_id)?;
            Some(UtilizationRow {
                station_id: station.station_id.clone(),
                station_name: station.name.clone(),
                lat: station.lat,
                lon: station.lon,
                sessions: waits.len() as u64,
                mean_wait: stats::mean(&waits),
            })
        })
        .collect()
}
