//! JSON persistence helpers for the store file
//!
//! Saves go through a sibling `.json.tmp` file that is synced and then
//! renamed over the target, so a crash mid-save leaves the old store intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

fn io_error(action: &str, path: &Path, err: impl std::fmt::Display) -> LedgerError {
    LedgerError::Io(format!("{} {}: {}", action, path.display(), err))
}

/// Deserialize `path`, or `T::default()` when there is no file yet
///
/// An unreadable file is `LedgerError::Io`; content that does not decode
/// as `T` is `LedgerError::Deserialization`.
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| io_error("Failed to open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        LedgerError::Deserialization(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Serialize `data` as pretty JSON and replace `path` in one rename
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("Failed to create directory", parent, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let file = File::create(&staging).map_err(|e| io_error("Failed to create", &staging, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| io_error("Failed to serialize into", &staging, e))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| io_error("Failed to sync", &staging, e))?;

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        io_error("Failed to replace", path, e)
    })
}
