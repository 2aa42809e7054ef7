//! The five view aggregations
//!
//! Each is an independent pure function over the filtered subset,
//! reusable across views. All of them return empty or zero-filled tables
//! for an empty subset.

pub mod distribution;
pub mod finance;
pub mod rankings;
pub mod utilization;
pub mod wait_times;

pub use distribution::{queue_capacity, CapacityRow, Distribution};
pub use finance::{revenue_vs_cost, RevenueCostRow};
pub use rankings::{busiest_stations, StationCount, TOP_STATIONS};
pub use utilization::{utilization_rollup, UtilizationRow};
pub use wait_times::{wait_time_series, WaitTimePoint, WaitTimeSeries};
