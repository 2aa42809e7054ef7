// ============================================================================
// Records
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Charger hardware generation installed at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargerType {
    V2,
    V3,
}

impl ChargerType {
    pub const ALL: [ChargerType; 2] = [ChargerType::V2, ChargerType::V3];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChargerType::V2 => "V2",
            ChargerType::V3 => "V3",
        }
    }

    /// Parse a charger-type label, case-insensitively.
    pub fn parse(s: &str) -> Option<ChargerType> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V2" => Some(ChargerType::V2),
            "V3" => Some(ChargerType::V3),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChargerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One charging event. Immutable once loaded; lives for the process
/// lifetime inside the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub station_id: String,
    pub start_time: NaiveDateTime,
    pub charger_type: ChargerType,
    pub wait_minutes: f64,
    pub energy_kwh: f64,
    pub revenue: f64,
    pub cost: f64,
    pub queue_length: u32,
    pub idle_ports: u32,
    pub satisfaction: f64,
}

impl Session {
    /// Calendar day the session started on.
    pub fn day(&self) -> NaiveDate {
        self.start_time.date()
    }
}

/// A physical charging site. Sessions reference stations many-to-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub region: String,
}

/// One row of the event side table: something happening near the network
/// on a given day (concert, road closure, holiday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub date: NaiveDate,
    pub label: String,
}
