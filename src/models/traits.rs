//! Trait definitions for catalog records and collections
//!
//! This module defines the core traits the catalog layer is built on:
//! record identity and the read-only collection contract shared by every
//! catalog.

use crate::error::{CatalogError, Result};

/// A trait that all catalog record types implement.
///
/// Records are plain immutable data; the only behaviour they share is
/// exposing the identifier they are looked up by.
pub trait CatalogRecord: Clone + std::fmt::Debug {
    /// Get the unique identifier for this record within its catalog
    fn id(&self) -> &str;
}

/// A read-only collection over a fixed record list.
///
/// `Catalog` provides the lookup and filtering contract shared by every
/// catalog: lookups return `Option` (absence is a value, never a panic) and
/// bulk accessors return fresh owned copies so callers can never mutate the
/// backing list through a returned vector.
pub trait Catalog {
    /// The record type this catalog owns
    type Record: CatalogRecord;

    /// Human-readable record kind, used in error messages
    const KIND: &'static str;

    /// Borrow the backing records. Internal building block for the owned
    /// accessors; the slice is immutable so the backing list cannot be
    /// altered through it.
    fn records(&self) -> &[Self::Record];

    /// Get all records as a fresh, owned copy
    #[must_use]
    fn all(&self) -> Vec<Self::Record> {
        self.records().to_vec()
    }

    /// Get a record by its identifier, or `None` if absent
    #[must_use]
    fn get(&self, id: &str) -> Option<Self::Record> {
        self.records().iter().find(|record| record.id() == id).cloned()
    }

    /// Get a record by its identifier, or a `NotFound` error if absent
    fn require(&self, id: &str) -> Result<Self::Record> {
        self.get(id).ok_or_else(|| CatalogError::NotFound {
            kind: Self::KIND,
            key: id.to_string(),
        })
    }

    /// Filter records by a predicate function
    #[must_use]
    fn filter<F>(&self, predicate: F) -> Vec<Self::Record>
    where
        F: Fn(&Self::Record) -> bool,
    {
        self.records()
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Count the total number of records in the catalog
    #[must_use]
    fn count(&self) -> usize {
        self.records().len()
    }
}
