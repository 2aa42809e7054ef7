//! Filter selection
//!
//! The ephemeral value object describing what a user has narrowed the
//! dashboard to. A new selection is built on every interaction and
//! immediately supersedes the previous one; nothing here is persisted.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::ChargerType;

/// Charger-type predicate of a selection.
///
/// The "any" sentinel is a real variant so the skip-this-predicate branch
/// is a matched case, not a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargerFilter {
    Any,
    Only(ChargerType),
}

/// Region predicate of a selection. `All` skips the predicate entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionFilter {
    All,
    Only(BTreeSet<String>),
}

impl RegionFilter {
    /// Build a region filter from a list of labels. An empty list means no
    /// restriction, same as the dashboard's "all regions" state.
    pub fn from_labels<I>(labels: I) -> RegionFilter
    where
        I: IntoIterator<Item = String>,
    {
        let set: BTreeSet<String> = labels.into_iter().collect();
        if set.is_empty() {
            RegionFilter::All
        } else {
            RegionFilter::Only(set)
        }
    }

    pub fn allows(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(set) => set.contains(region),
        }
    }
}

/// The complete filter state for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// First day of the range, inclusive.
    pub start: NaiveDate,
    /// Last day of the range, inclusive.
    pub end: NaiveDate,
    pub charger: ChargerFilter,
    pub regions: RegionFilter,
}

impl FilterSelection {
    /// A selection covering `[start, end]` with no charger or region
    /// restriction.
    pub fn span(start: NaiveDate, end: NaiveDate) -> Self {
        FilterSelection { start, end, charger: ChargerFilter::Any, regions: RegionFilter::All }
    }

    pub fn with_charger(mut self, charger: ChargerType) -> Self {
        self.charger = ChargerFilter::Only(charger);
        self
    }

    pub fn with_regions<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.regions = RegionFilter::from_labels(labels);
        self
    }

    /// Both bounds inclusive.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}
