//! Catalog loading and name resolution

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::creature::Creature;

/// Errors from catalog loading. Analysis itself never touches I/O; a load
/// failure is fatal only to requests that needed the missing catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("Catalog malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The read-only creature catalog. Constructed once at process start and
/// shared by reference across requests; iteration order is load order and
/// anchors every downstream tie-break.
#[derive(Debug, Clone)]
pub struct Catalog {
    creatures: Vec<Creature>,
}

impl Catalog {
    /// Build a catalog from already-loaded records
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    /// Load the cleaned catalog JSON from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            creatures = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a cleaned-JSON string (a top-level array)
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let creatures: Vec<Creature> = serde_json::from_str(raw)?;
        Ok(Self::new(creatures))
    }

    /// First creature matching the requested name, canonical or localized,
    /// case-insensitive. Catalog order decides between duplicates.
    pub fn find(&self, requested: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.matches_name(requested))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}
