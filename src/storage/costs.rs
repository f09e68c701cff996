//! Cost repository for JSON storage
//!
//! Owns the in-memory cost collection and its on-disk mirror (a single JSON
//! array in costs.json). The collection is insertion-ordered.
//!
//! Persistence failures never abort the caller: a corrupt or unreadable file
//! loads as an empty collection with a logged warning, and a failed write
//! leaves the previous in-memory state in place with a logged error.
//! Mutations write the candidate collection to disk first and only commit it
//! to memory once the write has succeeded.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{error, warn};

use crate::error::{SubtrackError, SubtrackResult};
use crate::models::{CostId, CostRecord};

use super::file_io::{read_json, write_json_atomic};

/// Repository for cost record persistence
pub struct CostRepository {
    path: PathBuf,
    data: RwLock<Vec<CostRecord>>,
}

impl CostRepository {
    /// Create a new cost repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load costs from disk
    ///
    /// A missing file yields an empty collection. A corrupt payload also
    /// yields an empty collection; the parse error is logged, not returned.
    pub fn load(&self) -> SubtrackResult<()> {
        let records: Vec<CostRecord> = match read_json(&self.path) {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to load costs, starting with an empty list: {}", e);
                Vec::new()
            }
        };

        for record in &records {
            if record.renewal_day().is_none() {
                warn!(
                    "Cost '{}' has a malformed renewal date '{}'; keeping the record",
                    record.name, record.renewal_date
                );
            }
        }

        let mut data = self.write_lock()?;
        *data = records;
        Ok(())
    }

    /// Save the current collection to disk
    pub fn save(&self) -> SubtrackResult<()> {
        let data = self.read_lock()?;
        write_json_atomic(&self.path, &*data)
    }

    /// Get all costs in insertion order
    pub fn list(&self) -> SubtrackResult<Vec<CostRecord>> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Get a cost by ID
    pub fn get(&self, id: CostId) -> SubtrackResult<Option<CostRecord>> {
        let data = self.read_lock()?;
        Ok(data.iter().find(|c| c.id == id).cloned())
    }

    /// Get a cost by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> SubtrackResult<Option<CostRecord>> {
        let data = self.read_lock()?;
        let name_lower = name.to_lowercase();
        Ok(data
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Append a new cost
    ///
    /// Fails if a record with the same ID already exists.
    pub fn add(&self, record: CostRecord) -> SubtrackResult<()> {
        let mut data = self.write_lock()?;

        if data.iter().any(|c| c.id == record.id) {
            return Err(SubtrackError::Duplicate {
                entity_type: "Cost",
                identifier: record.id.to_string(),
            });
        }

        let mut candidate = data.clone();
        candidate.push(record);
        self.commit(&mut data, candidate);
        Ok(())
    }

    /// Replace an existing cost in place (position in the collection is kept)
    pub fn update(&self, record: CostRecord) -> SubtrackResult<()> {
        let mut data = self.write_lock()?;

        let index = data
            .iter()
            .position(|c| c.id == record.id)
            .ok_or_else(|| SubtrackError::cost_not_found(record.id.to_string()))?;

        let mut candidate = data.clone();
        candidate[index] = record;
        self.commit(&mut data, candidate);
        Ok(())
    }

    /// Remove a cost by ID, returning the removed record if it existed
    pub fn remove(&self, id: CostId) -> SubtrackResult<Option<CostRecord>> {
        let mut data = self.write_lock()?;

        let Some(index) = data.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        let mut candidate = data.clone();
        let removed = candidate.remove(index);
        self.commit(&mut data, candidate);
        Ok(Some(removed))
    }

    /// Count costs
    pub fn count(&self) -> SubtrackResult<usize> {
        let data = self.read_lock()?;
        Ok(data.len())
    }

    /// Persist the candidate collection and commit it to memory on success.
    /// On write failure the previous state is kept and the error is logged.
    fn commit(&self, data: &mut Vec<CostRecord>, candidate: Vec<CostRecord>) {
        match write_json_atomic(&self.path, &candidate) {
            Ok(()) => *data = candidate,
            Err(e) => {
                error!("Failed to save costs, keeping previous state: {}", e);
            }
        }
    }

    fn read_lock(&self) -> SubtrackResult<std::sync::RwLockReadGuard<'_, Vec<CostRecord>>> {
        self.data
            .read()
            .map_err(|e| SubtrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> SubtrackResult<std::sync::RwLockWriteGuard<'_, Vec<CostRecord>>> {
        self.data
            .write()
            .map_err(|e| SubtrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
