//! Usage-frequency store consumed by the ranker.
//!
//! The engine only reads usage counts; the surrounding application increments
//! them when a result is actually activated. The store is a trait so tests
//! can inject fakes, and reads may lag writes by a beat with no correctness
//! impact.

use log::warn;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QuickfindError, Result};

pub trait UsageStore: Send + Sync {
    fn get(&self, path: &Path) -> u64;
    fn increment(&self, path: &Path);
}

/// Null store: no usage bonus anywhere.
#[derive(Debug, Default)]
pub struct NoUsage;

impl UsageStore for NoUsage {
    fn get(&self, _path: &Path) -> u64 {
        0
    }

    fn increment(&self, _path: &Path) {}
}

/// In-memory store, used as the in-process default and as a test fake.
#[derive(Debug, Default)]
pub struct MemoryUsageStore {
    counts: RwLock<HashMap<PathBuf, u64>>,
}

impl MemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a count; handy for tests and migrations.
    pub fn set(&self, path: impl Into<PathBuf>, count: u64) {
        self.counts.write().insert(path.into(), count);
    }
}

impl UsageStore for MemoryUsageStore {
    fn get(&self, path: &Path) -> u64 {
        self.counts.read().get(path).copied().unwrap_or(0)
    }

    fn increment(&self, path: &Path) {
        *self.counts.write().entry(path.to_path_buf()).or_insert(0) += 1;
    }
}

/// File-backed store: a flat JSON map from path to count, loaded once at
/// open and rewritten on every increment. Persistence failures degrade to
/// warnings; a launcher must keep searching even when its usage file is
/// unwritable.
pub struct JsonUsageStore {
    file: PathBuf,
    counts: RwLock<HashMap<PathBuf, u64>>,
}

impl JsonUsageStore {
    /// Opens (or initializes) the store at `file`. A missing file is an
    /// empty store; a malformed one is an error so the caller can decide
    /// whether to start over.
    pub fn open(file: impl Into<PathBuf>) -> Result<Self> {
        let file = file.into();
        let counts = match fs::read_to_string(&file) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| QuickfindError::UsageStore {
                    path: file.clone(),
                    source: e,
                })?
            }
            Err(_) => HashMap::new(),
        };
        Ok(Self {
            file,
            counts: RwLock::new(counts),
        })
    }

    fn persist(&self) {
        let snapshot = self.counts.read().clone();
        let json = match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize usage counts: {e}");
                return;
            }
        };
        if let Some(parent) = self.file.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("failed to create {}: {e}", parent.display());
                return;
            }
        }
        if let Err(e) = fs::write(&self.file, json) {
            warn!("failed to write {}: {e}", self.file.display());
        }
    }
}

impl UsageStore for JsonUsageStore {
    fn get(&self, path: &Path) -> u64 {
        self.counts.read().get(path).copied().unwrap_or(0)
    }

    fn increment(&self, path: &Path) {
        *self
            .counts
            .write()
            .entry(path.to_path_buf())
            .or_insert(0) += 1;
        self.persist();
    }
}
