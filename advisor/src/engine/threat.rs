//! Catalog sweep for creatures that exploit the roster's top weaknesses

use triad_catalog::{counters, Catalog, Creature, TypeTag};

use crate::engine::{MAX_THREATS, TOP_WEAKNESSES};
use crate::report::{ThreatEntry, WeaknessEntry};

/// Rank catalog creatures by how well they exploit the aggregated
/// weaknesses.
///
/// For each of the top weakness types, its counter types are collected and
/// filtered to those that threaten at least one roster member. A single
/// catalog sweep then scores every creature carrying such a type:
/// attack + special attack + 50 per threatened roster member. Ties keep
/// catalog iteration order.
pub fn identify(
    catalog: &Catalog,
    members: &[&Creature],
    weaknesses: &[WeaknessEntry],
) -> Vec<ThreatEntry> {
    let mut menace_types: Vec<TypeTag> = Vec::new();
    for entry in weaknesses.iter().take(TOP_WEAKNESSES) {
        let weak_tag = TypeTag::new(&entry.type_id);
        for attacker in counters(&weak_tag) {
            let tag = TypeTag::new(attacker);
            if menace_types.contains(&tag) {
                continue;
            }
            if members.iter().any(|m| m.is_weak_to(&tag)) {
                menace_types.push(tag);
            }
        }
    }

    if menace_types.is_empty() {
        return Vec::new();
    }

    let mut threats: Vec<ThreatEntry> = Vec::new();
    for candidate in catalog.iter() {
        let carries_menace = candidate
            .types
            .iter()
            .any(|t| menace_types.contains(&TypeTag::new(t)));
        if !carries_menace {
            continue;
        }

        let threatened: Vec<&Creature> = members
            .iter()
            .copied()
            .filter(|m| {
                candidate
                    .types
                    .iter()
                    .any(|t| m.is_weak_to(&TypeTag::new(t)))
            })
            .collect();

        let score =
            candidate.stats.attack + candidate.stats.special_attack + 50 * threatened.len() as u32;

        threats.push(ThreatEntry {
            id: candidate.id,
            name: candidate.name.clone(),
            local_name: candidate.local_name.clone(),
            types: candidate.types.clone(),
            score,
            threatens: threatened.iter().map(|m| m.display_name().to_string()).collect(),
            justification: justify(candidate, &threatened),
        });
    }

    threats.sort_by(|a, b| b.score.cmp(&a.score));
    threats.truncate(MAX_THREATS);
    threats
}

fn justify(candidate: &Creature, threatened: &[&Creature]) -> String {
    let at_risk: Vec<&str> = threatened.iter().map(|m| m.display_name()).collect();

    let mut advantages: Vec<String> = Vec::new();
    if candidate.stats.attack > 100 {
        advantages.push(format!("attack {}", candidate.stats.attack));
    }
    if candidate.stats.special_attack > 100 {
        advantages.push(format!("special attack {}", candidate.stats.special_attack));
    }
    if candidate.stats.speed > 80 {
        advantages.push(format!("speed {}", candidate.stats.speed));
    }

    let mut text = if at_risk.is_empty() {
        format!("{} carries a threatening type", candidate.display_name())
    } else {
        format!("{} puts {} at risk", candidate.display_name(), at_risk.join(", "))
    };
    if !advantages.is_empty() {
        text.push_str(&format!("; key advantages: {}", advantages.join(", ")));
    }
    text
}
