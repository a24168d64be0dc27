//! Saving and loading parameter files.
//!
//! A parameter file is a flat JSON object from field name to number, e.g.
//!
//! ```json
//! {"capacitor":0.0001,"resistencia":100.0,"voltaje":5.0}
//! ```
//!
//! Files are written and read verbatim: unknown keys survive a round trip and
//! there is no schema version.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, TransientError};
use crate::params::ParameterMap;

/// Write a parameter mapping as JSON.
pub fn write_parameters<W: Write>(values: &ParameterMap, writer: W) -> Result<()> {
    serde_json::to_writer(writer, values)?;
    Ok(())
}

/// Read a parameter mapping from JSON.
pub fn read_parameters<R: Read>(reader: R) -> Result<ParameterMap> {
    Ok(serde_json::from_reader(reader)?)
}

/// Save a parameter mapping to `path`, replacing any existing file.
pub fn save_parameters(path: &Path, values: &ParameterMap) -> Result<()> {
    let json = serde_json::to_string(values)?;
    std::fs::write(path, json).map_err(|e| TransientError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), fields = values.len(), "saved parameters");
    Ok(())
}

/// Load a parameter mapping from `path`.
pub fn load_parameters(path: &Path) -> Result<ParameterMap> {
    let content = std::fs::read_to_string(path).map_err(|e| TransientError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let values: ParameterMap =
        serde_json::from_str(&content).map_err(|e| TransientError::JsonError {
            path: path.display().to_string(),
            source: e,
        })?;
    tracing::debug!(path = %path.display(), fields = values.len(), "loaded parameters");
    Ok(values)
}
