//! Filter evaluation over the session table
//!
//! A selection is the conjunction of three predicates: date range,
//! charger type, and region. Zero matching rows is an empty subset, not
//! an error.

use chargescope_storage::Dataset;
use chargescope_types::{ChargerFilter, FilterSelection, RegionFilter, Session};

/// Rows matching every predicate of the selection, in dataset order.
pub fn filter_sessions<'a>(
    dataset: &'a Dataset,
    selection: &FilterSelection,
) -> Vec<&'a Session> {
    dataset.sessions.iter().filter(|s| matches(dataset, s, selection)).collect()
}

fn matches(dataset: &Dataset, session: &Session, selection: &FilterSelection) -> bool {
    if !selection.contains_day(session.day()) {
        return false;
    }
    if let ChargerFilter::Only(charger) = selection.charger {
        if session.charger_type != charger {
            return false;
        }
    }
    match &selection.regions {
        RegionFilter::All => true,
        // Region lives on the station side of the join. A session whose
        // station is unknown can never satisfy a region restriction.
        RegionFilter::Only(_) => dataset
            .station(&session.station_id)
            .is_some_and(|station| selection.regions.allows(&station.region)),
    }
}
