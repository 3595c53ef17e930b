//! Environment-gated variable snapshots.
//!
//! When the `INSPECT_VARS` environment variable names a filesystem path,
//! [`vars`] appends a JSON snapshot of a name→value mapping there. With the
//! variable unset, or on any failure along the way, the call silently does
//! nothing: a debug aid must never crash or disrupt the host program, and a
//! lost snapshot is acceptable where a panic is not.
//!
//! There is no file locking; concurrent writers will interleave.
//!
//! ## Examples
//!
//! ```rust
//! use serde_inspect::{vars, FieldMap, Value};
//!
//! let mut snapshot = FieldMap::new();
//! snapshot.insert("request_id".to_string(), Value::from(42));
//! snapshot.insert("stage".to_string(), Value::from("resolve"));
//!
//! // No-op unless INSPECT_VARS is set.
//! vars(&snapshot);
//! ```

use crate::{Error, FieldMap, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// The environment variable naming the snapshot file path.
pub const INSPECT_VARS_ENV: &str = "INSPECT_VARS";

/// Appends a JSON snapshot of `objs` to the file named by `INSPECT_VARS`.
///
/// Best-effort: every failure (unset variable, encoding error, filesystem
/// error) is swallowed and the call returns having done nothing observable.
pub fn vars(objs: &FieldMap) {
    let _ = try_vars(objs);
}

/// Fallible core of [`vars`]: `Ok(true)` when a snapshot was written,
/// `Ok(false)` when the environment variable is unset.
///
/// The public entry point discards this result; it exists so the swallowed
/// failure path stays observable in tests.
pub(crate) fn try_vars(objs: &FieldMap) -> Result<bool> {
    let Ok(path) = env::var(INSPECT_VARS_ENV) else {
        return Ok(false);
    };
    let path = PathBuf::from(path);

    let inner = serde_json::to_string(objs).map_err(|e| Error::json(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir(parent).map_err(|e| Error::io(&e.to_string()))?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| Error::io(&e.to_string()))?;

    // The payload is encoded twice: the file holds a JSON string literal
    // whose contents are the inner JSON document. Existing consumers parse
    // that layout, so it is preserved as-is.
    let outer = serde_json::to_string(&inner).map_err(|e| Error::json(e.to_string()))?;
    file.write_all(outer.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    file.write_all(b"\n").map_err(|e| Error::io(&e.to_string()))?;

    Ok(true)
}
