//! Job eligibility evaluation
//!
//! Companies state what a candidate must own as a tree of AND/OR conditions.
//! A candidate is described by a set of possessions, and each company's tree
//! is evaluated against that set.

pub mod domain;
pub use domain::{Company, Config, InvalidInput, Item, Operator, Possessions, Requirement};

/// Bulk evaluation of many companies against one candidate.
pub mod eligibility;
pub use eligibility::EligibilityResult;

/// The built-in demonstration catalog.
pub mod sample;

/// Loading companies and candidates from YAML files.
pub mod storage;
pub use storage::{Catalog, LoadError};
