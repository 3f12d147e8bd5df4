/// Error raised when a value violates a construction or evaluation rule.
///
/// Every variant is the same kind of failure (invalid input); the variant
/// only records which rule was broken.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// A required item was absent or blank after trimming.
    #[error("required item cannot be empty")]
    EmptyItem,

    /// A composite requirement was declared without an operator.
    #[error("composite requirement is missing its operator")]
    MissingOperator,

    /// The operator was not `AND` or `OR`.
    #[error("unknown operator '{0}': expected AND or OR")]
    UnknownOperator(String),

    /// A composite requirement had no children.
    #[error("composite requirement must have at least one child")]
    NoChildren,

    /// A composite requirement contained an absent child.
    #[error("child {index} of composite requirement is missing")]
    MissingChild {
        /// Zero-based position of the absent child.
        index: usize,
    },

    /// A company name was absent or blank after trimming.
    #[error("company name cannot be empty")]
    EmptyCompanyName,

    /// No possession set was supplied.
    #[error("possessions must be provided")]
    MissingPossessions,
}
