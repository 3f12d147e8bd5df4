use std::{io::Read, path::Path};

use serde::Deserialize;

use super::LoadError;
use crate::{InvalidInput, Possessions};

/// A candidate description file.
///
/// ```yaml
/// possessions:
///   - bike
///   - driving license
/// ```
///
/// An explicit empty list is a candidate who owns nothing; a missing or null
/// `possessions` key is an error.
#[derive(Debug, Deserialize)]
struct RawCandidate {
    #[serde(default)]
    possessions: Option<Vec<String>>,
}

impl TryFrom<RawCandidate> for Possessions {
    type Error = InvalidInput;

    fn try_from(raw: RawCandidate) -> Result<Self, Self::Error> {
        raw.possessions
            .map(|possessions| possessions.into_iter().collect())
            .ok_or(InvalidInput::MissingPossessions)
    }
}

/// Reads a candidate's possessions from a YAML file.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, is not valid
/// YAML, or has no `possessions` list.
pub fn load_possessions(path: &Path) -> Result<Possessions, LoadError> {
    let possessions = read_possessions(super::open(path)?)?;
    tracing::debug!(
        "Loaded {} possessions from {}",
        possessions.len(),
        path.display()
    );
    Ok(possessions)
}

/// Reads a candidate's possessions from any YAML source.
///
/// # Errors
///
/// Returns an error if the input is not valid YAML or has no `possessions`
/// list.
pub fn read_possessions<R: Read>(reader: R) -> Result<Possessions, LoadError> {
    let raw: RawCandidate = serde_yaml::from_reader(reader)?;
    Ok(raw.try_into()?)
}
