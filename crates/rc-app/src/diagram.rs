//! Optional circuit diagram asset.

use std::path::{Path, PathBuf};

pub const DIAGRAM_FILE: &str = "rc_circuit.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramAsset {
    Available(PathBuf),
    /// Not fatal; the frontend shows `hint` instead of the image.
    Missing { hint: String },
}

impl DiagramAsset {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Available(path) => Some(path),
            Self::Missing { .. } => None,
        }
    }
}

/// Look for [`DIAGRAM_FILE`] in `dir`.
pub fn locate_diagram(dir: &Path) -> DiagramAsset {
    let path = dir.join(DIAGRAM_FILE);
    if path.is_file() {
        DiagramAsset::Available(path)
    } else {
        tracing::debug!(path = %path.display(), "circuit diagram not found");
        DiagramAsset::Missing {
            hint: format!(
                "Add an image named `{}` to {} to show the circuit diagram.",
                DIAGRAM_FILE,
                dir.display()
            ),
        }
    }
}
