//! Revenue and operating cost per station.

use std::collections::HashMap;

use chargescope_storage::Dataset;
use chargescope_types::Session;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueCostRow {
    pub station_id: String,
    pub station_name: String,
    pub revenue: f64,
    pub cost: f64,
}

/// Revenue and cost totals per station, ordered by station id. Every
/// station in the network is present; stations without sessions in the
/// subset carry zero totals.
pub fn revenue_vs_cost(dataset: &Dataset, subset: &[&Session]) -> Vec<RevenueCostRow> {
    let mut totals: HashMap<&str, (f64, f64)> = HashMap::new();
    for session in subset {
        let entry = totals.entry(session.station_id.as_str()).or_insert((0.0, 0.0));
        entry.0 += session.revenue;
        entry.1 += session.cost;
    }

    dataset
        .stations
        .values()
        .map(|station| {
            let (revenue, cost) =
                totals.get(station.station_id.as_str()).copied().unwrap_or((0.0, 0.0));
            RevenueCostRow {
                station_id: station.station_id.clone(),
                station_name: station.name.clone(),
                revenue,
                cost,
            }
        })
        .collect()
}
