//! Content catalog.
//!
//! An immutable, ordered collection of [`CatalogEntry`] records loaded once
//! at startup. Lookups never fail loudly: an unknown id is simply `None`.

mod case_study;
mod category;
mod entry;
mod error;
mod filter;

#[cfg(test)]
pub(crate) mod tests;

use serde::Serialize;
use std::collections::HashMap;

pub use case_study::CaseStudy;
pub use category::{Category, UnknownCategory};
pub use entry::CatalogEntry;
pub use error::CatalogError;
pub use filter::{CatalogFilter, CategoryFilter, ViewToggle};

use crate::ids::EntryId;

/// One row of the filter bar: a category option and how many entries it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub filter: CategoryFilter,
    pub count: usize,
}

/// Read-only catalog of portfolio entries in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Build a catalog, validating entry shape.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyId`] if an id is blank
    /// - [`CatalogError::DuplicateId`] if two entries share an id
    /// - [`CatalogError::EmptyField`] if a required display string is blank
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if let Some((field, _)) = entry
                .display_fields()
                .into_iter()
                .find(|(_, value)| value.trim().is_empty())
            {
                return Err(CatalogError::EmptyField {
                    id: entry.id.clone(),
                    field,
                });
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Every entry in declaration order.
    pub fn list_all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries matching every active filter dimension, in catalog order.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn featured(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.featured).collect()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The entry after `id` in declaration order, wrapping to the first.
    pub fn next_after(&self, id: &str) -> Option<&CatalogEntry> {
        let position = self.position_of(id)?;
        Some(&self.entries[(position + 1) % self.entries.len()])
    }

    /// The entry before `id` in declaration order, wrapping to the last.
    pub fn previous_before(&self, id: &str) -> Option<&CatalogEntry> {
        let position = self.position_of(id)?;
        let len = self.entries.len();
        Some(&self.entries[(position + len - 1) % len])
    }

    /// `All` followed by every [`Category`], including empty ones.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .map(|filter| CategoryCount {
                filter,
                count: self.entries.iter().filter(|e| filter.matches(e)).count(),
            })
            .collect()
    }
}
