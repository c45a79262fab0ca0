//! Roster-swap suggestions against the top aggregated weakness

use triad_catalog::{Catalog, TypeTag};

use crate::engine::MAX_REPLACEMENTS;
use crate::report::{ReplacementEntry, WeaknessEntry};

/// Catalog creatures that resist the single top weakness type, ranked
/// descending by defense + special defense (catalog order on ties), top 3.
/// No resisting creature is a valid, empty outcome.
pub fn suggest(catalog: &Catalog, top_weakness: Option<&WeaknessEntry>) -> Vec<ReplacementEntry> {
    let Some(top) = top_weakness else {
        return Vec::new();
    };
    let tag = TypeTag::new(&top.type_id);

    let mut picks: Vec<ReplacementEntry> = catalog
        .iter()
        .filter(|c| c.resists(&tag))
        .map(|c| ReplacementEntry {
            id: c.id,
            name: c.name.clone(),
            local_name: c.local_name.clone(),
            types: c.types.clone(),
            total_defense: c.stats.total_defense(),
        })
        .collect();

    picks.sort_by(|a, b| b.total_defense.cmp(&a.total_defense));
    picks.truncate(MAX_REPLACEMENTS);
    picks
}
