//! CSV dataset loading
//!
//! The dataset is produced by an external generation process with a fixed
//! schema. Rows are deserialized strictly: any deviation from that schema
//! is a fatal `SchemaMismatch`, not something to recover from.

use std::path::Path;

use chargescope_types::{ChargerType, EventMarker, Session, Station};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::store::DatasetPaths;
use crate::{Dataset, StorageError};

#[derive(Debug, Deserialize)]
struct SessionRow {
    session_id: String,
    station_id: String,
    start_time: String,
    charger_type: String,
    wait_minutes: f64,
    energy_kwh: f64,
    revenue: f64,
    cost: f64,
    queue_length: u32,
    idle_ports: u32,
    satisfaction: f64,
}

#[derive(Debug, Deserialize)]
struct StationRow {
    station_id: String,
    station_name: String,
    lat: f64,
    lon: f64,
    region: String,
}

#[derive(Debug, Deserialize)]
struct EventRow {
    date: String,
    label: String,
}

pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset, StorageError> {
    let sessions = read_sessions(&paths.sessions)?;
    let stations = read_stations(&paths.stations)?;
    let events = read_events(&paths.events)?;
    Ok(Dataset::new(sessions, stations, events))
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, StorageError> {
    csv::Reader::from_path(path).map_err(|e| StorageError::DataUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn row_error(path: &Path, err: &csv::Error) -> StorageError {
    StorageError::SchemaMismatch {
        path: path.to_path_buf(),
        line: err.position().map(|p| p.line()).unwrap_or(0),
        reason: err.to_string(),
    }
}

fn read_sessions(path: &Path) -> Result<Vec<Session>, StorageError> {
    let mut reader = open_reader(path)?;
    let mut sessions = Vec::new();
    for (idx, row) in reader.deserialize::<SessionRow>().enumerate() {
        let row = row.map_err(|e| row_error(path, &e))?;
        // Data line numbers start at 2; line 1 is the header.
        sessions.push(convert_session(path, idx as u64 + 2, row)?);
    }
    Ok(sessions)
}

fn convert_session(path: &Path, line: u64, row: SessionRow) -> Result<Session, StorageError> {
    let start_time = parse_timestamp(&row.start_time).ok_or_else(|| {
        StorageError::SchemaMismatch {
            path: path.to_path_buf(),
            line,
            reason: format!("invalid timestamp '{}'", row.start_time),
        }
    })?;
    let charger_type = ChargerType::parse(&row.charger_type).ok_or_else(|| {
        StorageError::SchemaMismatch {
            path: path.to_path_buf(),
            line,
            reason: format!("unknown charger type '{}'", row.charger_type),
        }
    })?;
    Ok(Session {
        session_id: row.session_id,
        station_id: row.station_id,
        start_time,
        charger_type,
        wait_minutes: row.wait_minutes,
        energy_kwh: row.energy_kwh,
        revenue: row.revenue,
        cost: row.cost,
        queue_length: row.queue_length,
        idle_ports: row.idle_ports,
        satisfaction: row.satisfaction,
    })
}

/// Timestamps arrive either space- or T-separated depending on the
/// exporter that wrote the file.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn read_stations(path: &Path) -> Result<Vec<Station>, StorageError> {
    let mut reader = open_reader(path)?;
    let mut stations = Vec::new();
    for row in reader.deserialize::<StationRow>() {
        let row = row.map_err(|e| row_error(path, &e))?;
        stations.push(Station {
            station_id: row.station_id,
            name: row.station_name,
            lat: row.lat,
            lon: row.lon,
            region: row.region,
        });
    }
    Ok(stations)
}

fn read_events(path: &Path) -> Result<Vec<EventMarker>, StorageError> {
    let mut reader = open_reader(path)?;
    let mut events = Vec::new();
    for (idx, row) in reader.deserialize::<EventRow>().enumerate() {
        let row = row.map_err(|e| row_error(path, &e))?;
        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d").map_err(|_| {
            StorageError::SchemaMismatch {
                path: path.to_path_buf(),
                line: idx as u64 + 2,
                reason: format!("invalid event date '{}'", row.date),
            }
        })?;
        events.push(EventMarker { date, label: row.label });
    }
    Ok(events)
}
