//! JSON file helpers
//!
//! All persisted state goes through these two functions: a read that treats
//! a missing file as the default value, and a replace-on-success write so a
//! crash mid-write never leaves a half-serialized file behind.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SubtrackError, SubtrackResult};

/// Read a JSON value from `path`, or its default if the file does not exist
pub fn read_json<T, P>(path: P) -> SubtrackResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(SubtrackError::Storage(format!(
                "Cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        SubtrackError::Storage(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Write a JSON value to `path`, replacing the old content only once the new
/// content is fully on disk
///
/// The value is serialized up front, written to a sibling `.tmp` file, synced,
/// and renamed over the target. The rename is what makes the old and new
/// content the only two observable states.
pub fn write_json_atomic<T, P>(path: P, value: &T) -> SubtrackResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SubtrackError::Storage(format!("Cannot create {}: {}", parent.display(), e))
        })?;
    }

    let payload = serde_json::to_vec_pretty(value).map_err(|e| {
        SubtrackError::Storage(format!("Cannot serialize {}: {}", path.display(), e))
    })?;

    let tmp = path.with_extension("tmp");
    stage(&tmp, &payload).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SubtrackError::Storage(format!("Cannot write {}: {}", tmp.display(), e))
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SubtrackError::Storage(format!("Cannot replace {}: {}", path.display(), e))
    })
}

/// Write the payload to the staging file and flush it to disk
fn stage(tmp: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(payload)?;
    file.sync_all()
}
