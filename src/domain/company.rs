use std::fmt;

use non_empty_string::NonEmptyString;

use super::{InvalidInput, Possessions, Requirement};

/// Rendered in place of a description when a company requires nothing.
const NO_REQUIREMENTS: &str = "No requirements";

/// A company offering work, and what a candidate needs to take it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    name: NonEmptyString,
    requirement: Option<Requirement>,
}

impl Company {
    /// Creates a company. The name is stored trimmed.
    ///
    /// A company without a requirement accepts every candidate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyCompanyName`] if the name is blank.
    pub fn new(name: &str, requirement: Option<Requirement>) -> Result<Self, InvalidInput> {
        let name = NonEmptyString::new(name.trim().to_string())
            .map_err(|_| InvalidInput::EmptyCompanyName)?;
        Ok(Self { name, requirement })
    }

    /// The company's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The requirement tree, if any.
    #[must_use]
    pub const fn requirement(&self) -> Option<&Requirement> {
        self.requirement.as_ref()
    }

    /// Whether a candidate with these possessions can work here.
    #[must_use]
    pub fn can_work(&self, possessions: &Possessions) -> bool {
        self.requirement
            .as_ref()
            .is_none_or(|requirement| requirement.is_satisfied_by(possessions))
    }

    /// The requirement description, or `"No requirements"`.
    #[must_use]
    pub fn requirement_description(&self) -> String {
        self.requirement
            .as_ref()
            .map_or_else(|| NO_REQUIREMENTS.to_string(), Requirement::description)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.requirement {
            Some(requirement) => write!(f, "{}: {requirement}", self.name),
            None => write!(f, "{}: {NO_REQUIREMENTS}", self.name),
        }
    }
}
