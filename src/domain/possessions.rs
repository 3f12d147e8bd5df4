use std::{collections::BTreeSet, fmt};

use super::{Item, item::normalize};

/// The set of items a candidate currently has.
///
/// Entries are normalized once, when the set is built, using the same rule
/// as [`Item`]. Entries that are blank after trimming can never match an
/// item and are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Possessions(BTreeSet<String>);

impl Possessions {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a possession.
    ///
    /// Returns `true` if it was not already present (after normalization).
    pub fn insert(&mut self, possession: &str) -> bool {
        let normalized = normalize(possession);
        if normalized.is_empty() {
            return false;
        }
        self.0.insert(normalized)
    }

    /// Whether the candidate has the given item.
    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.0.contains(item.as_str())
    }

    /// The number of distinct possessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the candidate has nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the normalized possessions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Possessions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut possessions = Self::new();
        possessions.extend(iter);
        possessions
    }
}

impl<S: AsRef<str>> Extend<S> for Possessions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for possession in iter {
            self.insert(possession.as_ref());
        }
    }
}

impl fmt::Display for Possessions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(", ");
        write!(f, "{{{joined}}}")
    }
}
