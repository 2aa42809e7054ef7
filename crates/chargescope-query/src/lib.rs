//! Chargescope query layer
//!
//! Filtering, aggregation, and export over the loaded dataset. Everything
//! here is a pure function of `(dataset, selection)`: no state is held
//! between calls and identical inputs always produce identical outputs.
//! An empty filter result is a valid input everywhere; aggregations
//! degrade to empty or zero-valued tables instead of failing.

pub mod aggregate;
pub mod export;
pub mod filter;
mod stats;
pub mod summary;

pub use filter::filter_sessions;
pub use summary::{summarize, MetricSummary};

#[cfg(test)]
mod tests;
