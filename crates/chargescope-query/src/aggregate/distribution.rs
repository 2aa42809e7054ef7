//! Queue-length and idle-port distributions per station.

use std::collections::BTreeMap;

use chargescope_storage::Dataset;
use chargescope_types::Session;
use serde::Serialize;

use crate::stats;

/// Multiplier for the interquartile-range outlier rule.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Five-number summary plus outliers, the shape a boxplot draws from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Values beyond 1.5×IQR of the nearest quartile, ascending.
    pub outliers: Vec<f64>,
}

impl Distribution {
    /// `None` for an empty value list.
    pub fn from_values(mut values: Vec<f64>) -> Option<Distribution> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);
        let q1 = stats::quantile(&values, 0.25);
        let median = stats::quantile(&values, 0.5);
        let q3 = stats::quantile(&values, 0.75);
        let iqr = q3 - q1;
        let low = q1 - IQR_MULTIPLIER * iqr;
        let high = q3 + IQR_MULTIPLIER * iqr;
        let outliers = values.iter().copied().filter(|v| *v < low || *v > high).collect();
        Some(Distribution {
            min: values[0],
            q1,
            median,
            q3,
            max: values[values.len() - 1],
            outliers,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityRow {
    pub station_id: String,
    pub station_name: String,
    pub queue_length: Distribution,
    pub idle_ports: Distribution,
}

/// Full queue-length and idle-port distributions per station, ordered by
/// station id. Stations without sessions in the subset are omitted.
pub fn queue_capacity(dataset: &Dataset, subset: &[&Session]) -> Vec<CapacityRow> {
    let mut groups: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for session in subset {
        let entry = groups.entry(session.station_id.as_str()).or_default();
        entry.0.push(f64::from(session.queue_length));
        entry.1.push(f64::from(session.idle_ports));
    }

    groups
        .into_iter()
        .filter_map(|(station_id, (queues, idles))| {
            let queue_length = Distribution::from_values(queues)?;
            let idle_ports = Distribution::from_values(idles)?;
            Some(CapacityRow {
                station_id: station_id.to_string(),
                station_name: dataset
                    .station(station_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| station_id.to_string()),
                queue_length,
                idle_ports,
            })
        })
        .collect()
}
