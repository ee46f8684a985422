//! Proficiency sets.

use serde::{Deserialize, Serialize};

/// An insertion-ordered set of proficiency tokens.
///
/// Membership is what matters for calculations; order is kept only so the
/// wire list stays stable between saves. Duplicates are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProficiencySet<T: PartialEq>(Vec<T>);

impl<T: PartialEq> Default for ProficiencySet<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: PartialEq + Copy> ProficiencySet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: T) -> bool {
        self.0.contains(&token)
    }

    /// Add `token` if absent. Returns whether it was added.
    pub fn insert(&mut self, token: T) -> bool {
        if self.contains(token) {
            return false;
        }
        self.0.push(token);
        true
    }

    /// Remove `token` if present. Returns whether it was removed.
    pub fn remove(&mut self, token: T) -> bool {
        let before = self.0.len();
        self.0.retain(|t| *t != token);
        self.0.len() != before
    }

    /// Flip membership of `token`: absent becomes present, present becomes absent.
    pub fn toggle(&mut self, token: T) {
        if !self.remove(token) {
            self.0.push(token);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership comparison, ignoring order.
    pub fn same_members(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl<T: PartialEq + Copy> FromIterator<T> for ProficiencySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}
