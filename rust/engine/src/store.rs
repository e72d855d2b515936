//! JSON document helpers shared by the ledgers.
//!
//! Every ledger is one pretty-printed JSON object on disk, keyed by player
//! name. A missing file means "no data yet"; anything else that cannot be read
//! is reported as a [`StoreError`] and left to the caller to handle.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::errors::StoreError;

/// Value produced by a ledger mutation, paired with the outcome of writing the
/// ledger back to disk. The in-memory change stands either way.
#[derive(Debug)]
#[must_use]
pub struct Saved<T> {
    pub value: T,
    pub result: Result<(), StoreError>,
}

impl<T> Saved<T> {
    pub fn new(value: T, result: Result<(), StoreError>) -> Self {
        Self { value, result }
    }

    /// Splits into the value and the save error, if any.
    pub fn into_parts(self) -> (T, Option<StoreError>) {
        (self.value, self.result.err())
    }
}

/// Reads the top-level object of a ledger file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_object(path: &Path) -> Result<Option<Map<String, Value>>, StoreError> {
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "ledger file missing, starting empty");
            return Ok(None);
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let value: Value = serde_json::from_str(&body).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(StoreError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Rewrites a ledger file in full, indented with four spaces.
pub fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let f = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(f);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut w, formatter);
    document
        .serialize(&mut ser)
        .map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    w.write_all(b"\n").map_err(io_err)?;
    w.flush().map_err(io_err)?;
    tracing::debug!(path = %path.display(), "ledger saved");
    Ok(())
}
