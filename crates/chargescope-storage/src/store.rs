//! Process-wide dataset cache
//!
//! The backing files are read on the first `dataset()` call and never
//! again; every later call returns the same shared snapshot. The cache
//! slot is mutex-guarded so concurrent first requests in a server
//! deployment cannot race the file read.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{loader, Dataset, StorageError};

/// Locations of the three dataset files.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub sessions: PathBuf,
    pub stations: PathBuf,
    pub events: PathBuf,
}

impl DatasetPaths {
    /// Conventional layout: `sessions.csv`, `stations.csv`, and
    /// `events.csv` under one directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        DatasetPaths {
            sessions: dir.join("sessions.csv"),
            stations: dir.join("stations.csv"),
            events: dir.join("events.csv"),
        }
    }
}

enum Source {
    Disk(DatasetPaths),
    Memory(Arc<Dataset>),
}

/// The dataset store: load once, live until process exit, never
/// invalidated. Passed explicitly to whoever needs data so tests can
/// substitute a fixture without touching shared state.
pub struct DatasetStore {
    source: Source,
    cached: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetStore {
    /// A store backed by files on disk. Nothing is read until the first
    /// `dataset()` call.
    pub fn open(paths: DatasetPaths) -> Self {
        DatasetStore { source: Source::Disk(paths), cached: Mutex::new(None) }
    }

    /// A store over an already-built dataset. Never touches disk; used by
    /// tests and fixtures.
    pub fn preloaded(dataset: Dataset) -> Self {
        DatasetStore { source: Source::Memory(Arc::new(dataset)), cached: Mutex::new(None) }
    }

    /// The loaded dataset. The first call on a disk-backed store performs
    /// the read; a failed load is not cached, so a later call will retry.
    pub fn dataset(&self) -> Result<Arc<Dataset>, StorageError> {
        match &self.source {
            Source::Memory(dataset) => Ok(Arc::clone(dataset)),
            Source::Disk(paths) => {
                let mut slot = self.cached.lock();
                if let Some(dataset) = slot.as_ref() {
                    return Ok(Arc::clone(dataset));
                }
                let dataset = Arc::new(loader::load_dataset(paths)?);
                *slot = Some(Arc::clone(&dataset));
                Ok(dataset)
            }
        }
    }
}
