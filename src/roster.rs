//! Roster file loading
//!
//! Reads a record collection from a JSON file: an array of
//! `{"name": ..., "value": ...}` objects, kept in file order.

use std::fs;
use std::path::Path;

use crate::collection::{Record, RecordCollection};
use crate::error::{Result, TopRankError};

/// Load a collection from a JSON roster file
pub fn load_roster(path: impl AsRef<Path>) -> Result<RecordCollection> {
    let path = path.as_ref();

    let bytes = fs::read(path)?;
    let records: Vec<Record> = serde_json::from_slice(&bytes)
        .map_err(|e| TopRankError::RosterParse(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), count = records.len(), "loaded roster");

    Ok(RecordCollection::from_records(records))
}
