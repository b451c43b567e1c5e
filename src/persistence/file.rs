use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::store::{CdRecord, Inventory};

use super::error::PersistenceError;

/// Serializes the full record sequence and overwrites `path`.
pub fn save(path: &Path, inventory: &Inventory) -> Result<(), PersistenceError> {
    let encoded = bincode::serialize(inventory.records())?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(&encoded)?;
    Ok(())
}

/// Reads the snapshot at `path` and rebuilds an inventory from it.
/// A missing file is reported as its own variant; no failure path hands
/// back a partial inventory.
pub fn load(path: &Path) -> Result<Inventory, PersistenceError> {
    let mut file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => PersistenceError::FileNotFound(path.to_path_buf()),
        _ => PersistenceError::Io(err),
    })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let records: Vec<CdRecord> = bincode::deserialize(&buffer)?;
    Ok(Inventory::from_records(records))
}
