//! Chargescope storage - in-memory dataset
//!
//! Loads the pre-generated network dataset from disk exactly once per
//! process and serves immutable snapshots to the query layer. There is no
//! write path: the one-time load is the only mutation the dataset ever
//! sees.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod store;

pub use dataset::Dataset;
pub use error::StorageError;
pub use store::{DatasetPaths, DatasetStore};
