//! Domain models for eligibility evaluation.
//!
//! This module contains the requirement tree, the companies that own those
//! trees, the candidate's possessions, and configuration.

/// Requirement trees and their evaluation.
pub mod requirement;
pub use requirement::{Operator, Requirement};

mod company;
pub use company::Company;

mod config;
pub use config::Config;

mod error;
pub use error::InvalidInput;

/// Normalized item names.
pub mod item;
pub use item::Item;

mod possessions;
pub use possessions::Possessions;
