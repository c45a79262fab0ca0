//! Roster-wide weakness aggregation

use triad_catalog::{notable_moves, Creature};

use crate::report::WeaknessEntry;

/// Tally how many roster members are weak to each type.
///
/// Entries accumulate in first-seen order; the final sort is stable and
/// descending by count, so equal-count types keep the order in which they
/// were first encountered. An empty result is a valid outcome ("no common
/// vulnerability"), not an error.
pub fn aggregate(members: &[&Creature]) -> Vec<WeaknessEntry> {
    let mut entries: Vec<WeaknessEntry> = Vec::new();

    for member in members {
        for tag in member.weakness_tags() {
            match entries.iter_mut().find(|e| e.type_id == tag.as_str()) {
                Some(entry) => {
                    entry.count += 1;
                    entry.affected.push(member.display_name().to_string());
                }
                None => entries.push(WeaknessEntry {
                    type_id: tag.as_str().to_string(),
                    label: tag.label().to_string(),
                    count: 1,
                    affected: vec![member.display_name().to_string()],
                    notable_moves: notable_moves(&tag).iter().map(|m| m.to_string()).collect(),
                }),
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
