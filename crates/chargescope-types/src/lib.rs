//! Chargescope domain model
//!
//! Record and filter types shared by the storage and query crates.

pub mod filter;
pub mod record;

pub use filter::{ChargerFilter, FilterSelection, RegionFilter};
pub use record::{ChargerType, EventMarker, Session, Station};
