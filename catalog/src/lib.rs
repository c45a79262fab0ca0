//! Static data layer for the triad roster advisor.
//!
//! This crate holds everything the analysis engine treats as read-only
//! input: elemental type tags with localized labels, the effectiveness
//! (counter) table, a notable-move table, and the creature catalog itself.
//!
//! ```text
//! triad-catalog (static data)  ← THIS CRATE
//!        │
//!        ▼
//! triad-advisor (analysis engine)
//! ```
//!
//! # Main Types
//!
//! - [`TypeTag`] - normalized elemental-type identifier with graceful
//!   pass-through for identifiers outside the known set
//! - [`Creature`] / [`Stats`] - immutable catalog records in the cleaned
//!   JSON shape
//! - [`Catalog`] - load-once, read-only collection with case-insensitive
//!   name resolution
//!
//! # Example
//!
//! ```no_run
//! use triad_catalog::Catalog;
//!
//! let catalog = Catalog::load("data/creatures.json")?;
//! if let Some(creature) = catalog.find("Pikachu") {
//!     println!("{} knows {} types", creature.name, creature.types.len());
//! }
//! # Ok::<(), triad_catalog::CatalogError>(())
//! ```

mod catalog;
mod creature;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use creature::{Creature, Stats};
pub use types::{counters, is_counter, notable_moves, TypeTag, KNOWN_TYPES};
