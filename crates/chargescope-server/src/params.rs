//! Query-parameter handling for the view endpoints.
//!
//! The renderer sends the sidebar state as plain query parameters; this
//! module resolves them against the dataset into a typed
//! `FilterSelection`.

use chargescope_storage::Dataset;
use chargescope_types::{ChargerType, FilterSelection};
use chrono::NaiveDate;
use serde::Deserialize;

/// Raw filter parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Charger type label, or "any".
    pub charger: Option<String>,
    /// Comma-separated region labels, or "all".
    pub regions: Option<String>,
    /// Response format: "json" (default) or "csv".
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Csv,
}

/// A parameter the renderer sent that cannot be resolved. Maps to a 400.
#[derive(Debug, Clone, PartialEq)]
pub struct BadParam(pub String);

impl std::fmt::Display for BadParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FilterParams {
    /// Resolve the raw parameters: missing dates default to the dataset's
    /// full span, "any"/"all" sentinels map to the open filter variants.
    pub fn selection(&self, dataset: &Dataset) -> Result<FilterSelection, BadParam> {
        let (span_start, span_end) =
            dataset.date_span().unwrap_or((NaiveDate::MIN, NaiveDate::MAX));
        let start = self.start.unwrap_or(span_start);
        let end = self.end.unwrap_or(span_end);
        if start > end {
            return Err(BadParam(format!("start {} is after end {}", start, end)));
        }

        let mut selection = FilterSelection::span(start, end);

        if let Some(raw) = &self.charger {
            if !raw.eq_ignore_ascii_case("any") {
                let charger = ChargerType::parse(raw)
                    .ok_or_else(|| BadParam(format!("unknown charger type '{}'", raw)))?;
                selection = selection.with_charger(charger);
            }
        }

        if let Some(raw) = &self.regions {
            if !raw.eq_ignore_ascii_case("all") {
                let labels = raw
                    .split(',')
                    .map(|label| label.trim().to_string())
                    .filter(|label| !label.is_empty());
                selection = selection.with_regions(labels);
            }
        }

        Ok(selection)
    }

    pub fn format(&self) -> Result<ResponseFormat, BadParam> {
        match self.format.as_deref() {
            None => Ok(ResponseFormat::Json),
            Some(f) if f.eq_ignore_ascii_case("json") => Ok(ResponseFormat::Json),
            Some(f) if f.eq_ignore_ascii_case("csv") => Ok(ResponseFormat::Csv),
            Some(other) => Err(BadParam(format!("unknown format '{}'", other))),
        }
    }
}
