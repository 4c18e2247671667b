use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use trusseq::{LinearSystem, SolverConfig};

/// Linear system and solver settings as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemFile {
    /// Coefficients and right-hand side.
    #[serde(flatten)]
    pub system: LinearSystem,
    /// Solver settings; defaults apply when the block is missing.
    #[serde(default)]
    pub config: SolverConfig,
}

/// Error returned when a system file cannot be loaded.
#[derive(Debug, Error)]
pub enum SystemFileError {
    /// Returned when the file cannot be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the file is not a valid system description.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a system file.
pub fn load(path: &Path) -> Result<SystemFile, SystemFileError> {
    let contents = fs::read_to_string(path).map_err(|source| SystemFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, path)
}

/// Parse the JSON text of a system file read from `path`.
pub fn parse(contents: &str, path: &Path) -> Result<SystemFile, SystemFileError> {
    let file: SystemFile =
        serde_json::from_str(contents).map_err(|source| SystemFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "loaded {n}x{n} system from {}",
        path.display(),
        n = file.system.dimension()
    );
    Ok(file)
}

/// System solved when no file is given: `3a - b = 1`, `a + 2b = 12`.
#[must_use]
pub fn demo() -> SystemFile {
    SystemFile {
        system: LinearSystem::new(vec![vec![3.0, -1.0], vec![1.0, 2.0]], vec![1.0, 12.0]),
        config: SolverConfig::default(),
    }
}
