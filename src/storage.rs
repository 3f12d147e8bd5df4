/// Candidate possession files.
pub mod candidate;
/// Company catalog files.
pub mod catalog;

pub use candidate::load_possessions;
pub use catalog::Catalog;

use std::{io, path::PathBuf};

use crate::InvalidInput;

/// Errors that can occur when loading a catalog or candidate file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file was not found.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// An I/O error occurred.
    #[error("failed to read file")]
    Io(#[from] io::Error),
    /// The YAML could not be parsed.
    #[error("malformed YAML")]
    Yaml(#[from] serde_yaml::Error),
    /// A catalog entry was structurally valid YAML but not a valid company.
    #[error("invalid company at position {index}")]
    InvalidCompany {
        /// Zero-based position of the entry in the catalog.
        index: usize,
        /// The rule the entry broke.
        #[source]
        source: InvalidInput,
    },
    /// The file content violated a domain rule.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

/// Open a file for reading, mapping a missing file to [`LoadError::NotFound`].
fn open(path: &std::path::Path) -> Result<io::BufReader<std::fs::File>, LoadError> {
    let file = std::fs::File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(io_error),
    })?;
    Ok(io::BufReader::new(file))
}
