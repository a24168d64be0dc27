//! Circuit diagram lookup.
//!
//! Each topology has a static diagram image. A missing image only affects
//! what the shell can show next to the plots; it never stops a simulation.

use std::path::{Path, PathBuf};

use crate::circuit::Topology;
use crate::error::{Result, TransientError};

/// Directory searched for diagrams when none is configured.
pub const DEFAULT_ASSETS_DIR: &str = "clases_interfaz/assets";

/// File name of the diagram for `topology`.
pub fn diagram_file_name(topology: Topology) -> &'static str {
    match topology {
        Topology::RC => "circuito_RC.jpg",
        Topology::RL => "circuito_RL.jpg",
        Topology::RLC => "circuito_RLC.jpg",
    }
}

/// Where the diagram for `topology` is expected, whether or not it exists.
pub fn diagram_path(assets_dir: &Path, topology: Topology) -> PathBuf {
    assets_dir.join(diagram_file_name(topology))
}

/// Resolve the diagram for `topology`, failing if the file is absent.
pub fn resolve_diagram(assets_dir: &Path, topology: Topology) -> Result<PathBuf> {
    let path = diagram_path(assets_dir, topology);
    if path.is_file() {
        Ok(path)
    } else {
        Err(TransientError::MissingAsset {
            path: path.display().to_string(),
        })
    }
}
