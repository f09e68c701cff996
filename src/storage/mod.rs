//! Storage layer for subtrack
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod costs;
pub mod file_io;

pub use costs::CostRepository;

use crate::config::paths::SubtrackPaths;
use crate::error::SubtrackError;

/// Main storage coordinator
pub struct Storage {
    paths: SubtrackPaths,
    pub costs: CostRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SubtrackPaths) -> Result<Self, SubtrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            costs: CostRepository::new(paths.costs_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SubtrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SubtrackError> {
        self.costs.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SubtrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.costs.count().unwrap(), 0);
    }
}
