//! Category registry
//!
//! An ordered set of category names. Names are compared exactly (case
//! sensitive) and keep their insertion order for display. The registry is
//! never empty: removing the last remaining name is refused.
//!
//! Removing a category does not touch expenses here. Reassigning the orphaned
//! records is done by [`crate::ledger::Ledger::remove_category`], which holds
//! both the registry and the store.

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default taxonomy for a fresh ledger
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Healthcare",
    "Other",
];

/// Category that orphaned expenses are reassigned to
pub const FALLBACK_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Build a registry from seed names, dropping empty names and duplicates.
    ///
    /// Falls back to the fallback category alone if nothing usable is given,
    /// so the registry is never empty.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self { names: Vec::new() };
        for name in names {
            let name = name.into();
            if !name.trim().is_empty() && !registry.contains(&name) {
                registry.names.push(name);
            }
        }
        if registry.names.is_empty() {
            registry.names.push(FALLBACK_CATEGORY.to_string());
        }
        registry
    }

    /// Append a category
    pub fn add(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            warn!("Rejected empty category name");
            return Err(Error::EmptyCategoryName);
        }
        if self.contains(name) {
            warn!(category = name, "Rejected duplicate category");
            return Err(Error::DuplicateCategory(name.to_string()));
        }

        self.names.push(name.to_string());
        debug!(category = name, count = self.names.len(), "Added category");
        Ok(())
    }

    /// Remove a category from the name set.
    ///
    /// Refused while only one category remains, even if `name` is not that
    /// category. Removing a name that is not present is otherwise a no-op.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if self.names.len() <= 1 {
            warn!(category = name, "Refused to remove last remaining category");
            return Err(Error::LastCategory(name.to_string()));
        }

        self.names.retain(|existing| existing != name);
        debug!(category = name, count = self.names.len(), "Removed category");
        Ok(())
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}
