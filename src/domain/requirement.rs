use std::{fmt, str::FromStr};

use nonempty::NonEmpty;

use super::{InvalidInput, Item, Possessions};

/// How the children of a composite requirement are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Every child must be satisfied.
    And,
    /// At least one child must be satisfied.
    Or,
}

impl Operator {
    /// The token used when rendering descriptions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = InvalidInput;

    /// Parses `AND` or `OR`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(InvalidInput::UnknownOperator(s.to_string())),
        }
    }
}

/// A node in a boolean expression describing what a candidate must own.
///
/// A requirement is either a single item, or a combination of child
/// requirements joined by [`Operator::And`] or [`Operator::Or`]. Trees are
/// immutable once built and can be cloned or shared freely between
/// companies and threads.
///
/// # Examples
///
/// ```
/// use eligibility::{Operator, Possessions, Requirement};
///
/// let requirement = Requirement::composite(
///     Operator::And,
///     vec![
///         Requirement::any(vec![
///             Requirement::simple("apartment")?,
///             Requirement::simple("house")?,
///         ])?,
///         Requirement::simple("property insurance")?,
///     ],
/// )?;
///
/// assert_eq!(
///     requirement.description(),
///     "((apartment OR house) AND property insurance)"
/// );
///
/// let possessions: Possessions = ["House", "property insurance"].into_iter().collect();
/// assert!(requirement.is_satisfied_by(&possessions));
/// # Ok::<(), eligibility::InvalidInput>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// A leaf requiring exactly one item.
    Simple(Item),

    /// An interior node combining its children.
    Composite {
        /// How the children are combined.
        operator: Operator,
        /// The child requirements, in construction order.
        ///
        /// Boxed because `NonEmpty` stores its first element inline.
        children: Box<NonEmpty<Requirement>>,
    },
}

impl Requirement {
    /// Creates a leaf requiring the given item.
    ///
    /// The item is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyItem`] if the item is blank.
    pub fn simple(item: &str) -> Result<Self, InvalidInput> {
        Item::new(item).map(Self::Simple)
    }

    /// Creates an interior node combining `children` with `operator`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NoChildren`] if `children` is empty.
    pub fn composite(operator: Operator, children: Vec<Self>) -> Result<Self, InvalidInput> {
        let children = NonEmpty::from_vec(children).ok_or(InvalidInput::NoChildren)?;
        Ok(Self::Composite {
            operator,
            children: Box::new(children),
        })
    }

    /// Shorthand for an [`Operator::And`] composite.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NoChildren`] if `children` is empty.
    pub fn all(children: Vec<Self>) -> Result<Self, InvalidInput> {
        Self::composite(Operator::And, children)
    }

    /// Shorthand for an [`Operator::Or`] composite.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NoChildren`] if `children` is empty.
    pub fn any(children: Vec<Self>) -> Result<Self, InvalidInput> {
        Self::composite(Operator::Or, children)
    }

    /// Whether the candidate's possessions satisfy this requirement.
    ///
    /// AND nodes stop at the first unsatisfied child and OR nodes at the
    /// first satisfied one. Evaluation is pure, so this only affects speed.
    #[must_use]
    pub fn is_satisfied_by(&self, possessions: &Possessions) -> bool {
        match self {
            Self::Simple(item) => possessions.contains(item),
            Self::Composite {
                operator: Operator::And,
                children,
            } => children.iter().all(|child| child.is_satisfied_by(possessions)),
            Self::Composite {
                operator: Operator::Or,
                children,
            } => children.iter().any(|child| child.is_satisfied_by(possessions)),
        }
    }

    /// A fully parenthesized rendering of the tree.
    ///
    /// Leaves render as their item; composites render as
    /// `(child OP child OP ...)` in construction order.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl From<Item> for Requirement {
    fn from(item: Item) -> Self {
        Self::Simple(item)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Simple(item) => write!(f, "{item}"),
            Self::Composite { operator, children } => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {operator} ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
