//! CSV export of every view table
//!
//! Column names match the aggregation structs so a downloaded file lines
//! up with what the dashboard renders. Empty tables export as a
//! header-only document.

use std::io::{self, Write};

use chargescope_types::EventMarker;

use crate::aggregate::{
    CapacityRow, Distribution, RevenueCostRow, StationCount, UtilizationRow, WaitTimeSeries,
};
use crate::summary::MetricSummary;

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error during export: {}", e),
            ExportError::Csv(e) => write!(f, "CSV error during export: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Csv(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

/// Render one of the writers below into a `String`, for download
/// responses.
pub fn csv_string<F>(write: F) -> Result<String, ExportError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), ExportError>,
{
    let mut buf = Vec::new();
    write(&mut buf)?;
    // The writers only ever emit UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_utilization<W: Write>(out: W, rows: &[UtilizationRow]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["station_id", "station_name", "lat", "lon", "sessions", "mean_wait"])?;
    for row in rows {
        w.write_record([
            row.station_id.clone(),
            row.station_name.clone(),
            row.lat.to_string(),
            row.lon.to_string(),
            row.sessions.to_string(),
            row.mean_wait.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_wait_times<W: Write>(out: W, series: &WaitTimeSeries) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["date", "sessions", "mean_wait", "rolling_mean", "anomaly"])?;
    for point in &series.points {
        let rolling = point.rolling_mean.map(|r| r.to_string()).unwrap_or_default();
        w.write_record([
            point.date.to_string(),
            point.sessions.to_string(),
            point.mean_wait.to_string(),
            rolling,
            point.anomaly.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_events<W: Write>(out: W, events: &[EventMarker]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["date", "label"])?;
    for event in events {
        w.write_record([event.date.to_string(), event.label.clone()])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_busiest<W: Write>(out: W, rows: &[StationCount]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["station_id", "station_name", "sessions"])?;
    for row in rows {
        w.write_record([
            row.station_id.clone(),
            row.station_name.clone(),
            row.sessions.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_revenue_cost<W: Write>(out: W, rows: &[RevenueCostRow]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["station_id", "station_name", "revenue", "cost"])?;
    for row in rows {
        w.write_record([
            row.station_id.clone(),
            row.station_name.clone(),
            row.revenue.to_string(),
            row.cost.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_queue_capacity<W: Write>(out: W, rows: &[CapacityRow]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record([
        "station_id",
        "station_name",
        "metric",
        "min",
        "q1",
        "median",
        "q3",
        "max",
        "outliers",
    ])?;
    for row in rows {
        write_distribution(&mut w, row, "queue_length", &row.queue_length)?;
        write_distribution(&mut w, row, "idle_ports", &row.idle_ports)?;
    }
    w.flush()?;
    Ok(())
}

fn write_distribution<W: Write>(
    w: &mut csv::Writer<W>,
    row: &CapacityRow,
    metric: &str,
    dist: &Distribution,
) -> Result<(), ExportError> {
    let outliers =
        dist.outliers.iter().map(f64::to_string).collect::<Vec<_>>().join(";");
    w.write_record([
        row.station_id.clone(),
        row.station_name.clone(),
        metric.to_string(),
        dist.min.to_string(),
        dist.q1.to_string(),
        dist.median.to_string(),
        dist.q3.to_string(),
        dist.max.to_string(),
        outliers,
    ])?;
    Ok(())
}

pub fn write_summary<W: Write>(out: W, summary: &MetricSummary) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["sessions", "mean_wait", "total_revenue", "mean_satisfaction"])?;
    w.write_record([
        summary.sessions.to_string(),
        summary.mean_wait.to_string(),
        summary.total_revenue.to_string(),
        summary.mean_satisfaction.to_string(),
    ])?;
    w.flush()?;
    Ok(())
}
