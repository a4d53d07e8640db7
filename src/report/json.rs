//! Pretty-printed JSON dumps of recorded measurements.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Serialize a value as JSON with 4-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a value as pretty JSON, overwriting any existing file at `path`.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    fs::write(path, to_pretty_json(value)?)?;
    Ok(())
}

/// Write a value as pretty JSON, logging any failure instead of propagating.
///
/// Measurement collection already succeeded by the time this runs, so a
/// failed dump is reported and the run carries on.
pub fn persist<T: Serialize>(value: &T, path: &Path) {
    match write_json(value, path) {
        Ok(()) => tracing::info!("measurements saved to {}", path.display()),
        Err(err) => tracing::error!("failed to save {}: {}", path.display(), err),
    }
}
