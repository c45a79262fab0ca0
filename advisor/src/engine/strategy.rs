//! Counter-strategy text generation over already-computed aggregates

use triad_catalog::{Creature, TypeTag};

use crate::engine::TOP_WEAKNESSES;
use crate::report::{CounterStrategy, Priority, WeaknessEntry};

/// Compose prioritized guidance for each of the top weakness types.
///
/// Preference order: a resistant member absorbs hits, a member with a
/// type advantage counter-attacks; with neither available, fall back to
/// tank-and-stall guidance naming the bulkiest member and the fastest
/// member not itself weak to the threat (overall fastest if all are).
pub fn compose(members: &[&Creature], weaknesses: &[WeaknessEntry]) -> Vec<CounterStrategy> {
    weaknesses
        .iter()
        .take(TOP_WEAKNESSES)
        .map(|entry| {
            let tag = TypeTag::new(&entry.type_id);
            let absorber = members.iter().find(|m| m.resists(&tag));
            let counter = members.iter().find(|m| m.counters_type(&tag));

            let mut guidance: Vec<String> = Vec::new();
            if let Some(absorber) = absorber {
                guidance.push(format!(
                    "Send {} in to absorb {} hits (resistant)",
                    absorber.display_name(),
                    entry.label
                ));
            }
            if let Some(counter) = counter {
                guidance.push(format!(
                    "Counter-attack with {} (type advantage)",
                    counter.display_name()
                ));
            }
            if absorber.is_none() && counter.is_none() {
                guidance.push(tank_and_stall(members, &tag, &entry.label));
            }

            CounterStrategy {
                type_id: entry.type_id.clone(),
                label: entry.label.clone(),
                affected: entry.count,
                guidance,
                priority: if entry.count >= 2 {
                    Priority::High
                } else {
                    Priority::Medium
                },
            }
        })
        .collect()
}

fn tank_and_stall(members: &[&Creature], tag: &TypeTag, label: &str) -> String {
    // First index wins ties, matching catalog/request determinism elsewhere.
    let mut bulkiest = members[0];
    for m in &members[1..] {
        if m.stats.bulk() > bulkiest.stats.bulk() {
            bulkiest = m;
        }
    }

    let mut stallers: Vec<&Creature> = members
        .iter()
        .copied()
        .filter(|m| !m.is_weak_to(tag))
        .collect();
    if stallers.is_empty() {
        stallers = members.to_vec();
    }
    let mut fastest = stallers[0];
    for m in &stallers[1..] {
        if m.stats.speed > fastest.stats.speed {
            fastest = m;
        }
    }

    format!(
        "No resistance or type advantage against {}: let {} tank the hits while {} stalls for an opening",
        label,
        bulkiest.display_name(),
        fastest.display_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{creature, creature_with_stats, roster};
    use crate::engine::weakness;

    #[test]
    fn test_absorber_and_counter_named() {
        // Both weak to electric; one resists it, one carries a ground type
        // (amplified against electric).
        let sponge = creature(1, "Sponge", "吸獸", &["Grass"], &["Electric", "Fire"], &["Electric"]);
        let digger = creature(2, "Digger", "掘獸", &["Ground"], &["Electric", "Water"], &[]);
        let members = roster(&[&sponge, &digger]);
        let weaknesses = weakness::aggregate(&members);

        let strategies = compose(&members, &weaknesses);
        let electric = &strategies[0];
        assert_eq!(electric.type_id, "electric");
        assert_eq!(electric.priority, Priority::High);
        assert!(electric.guidance[0].contains("吸獸"));
        assert!(electric.guidance[0].contains("電"));
        assert!(electric.guidance[1].contains("掘獸"));
    }

    #[test]
    fn test_priority_medium_for_single_member() {
        let lone = creature(1, "Lone", "獨獸", &["Water"], &["Grass"], &[]);
        let members = roster(&[&lone]);
        let weaknesses = weakness::aggregate(&members);

        let strategies = compose(&members, &weaknesses);
        assert_eq!(strategies[0].priority, Priority::Medium);
    }

    #[test]
    fn test_tank_and_stall_fallback() {
        // Nobody resists or counters fighting; the bulkiest tanks and the
        // fastest member not weak to fighting stalls.
        let bulky = creature_with_stats(
            1, "Bulky", "壯獸", &["Normal"], &["Fighting"], &[], (120, 50, 100, 40, 100, 30),
        );
        let quick = creature_with_stats(
            2, "Quick", "迅獸", &["Electric"], &["Ground"], &[], (40, 60, 40, 60, 40, 120),
        );
        let members = roster(&[&bulky, &quick]);
        let weaknesses = weakness::aggregate(&members);

        let fighting = strategies_for(&members, &weaknesses, "fighting");
        assert_eq!(fighting.guidance.len(), 1);
        assert!(fighting.guidance[0].contains("壯獸"));
        assert!(fighting.guidance[0].contains("迅獸"));
    }

    #[test]
    fn test_stall_falls_back_to_overall_fastest_when_all_weak() {
        let slow = creature_with_stats(
            1, "Slow", "慢獸", &["Normal"], &["Fighting"], &[], (120, 50, 100, 40, 100, 30),
        );
        let fast = creature_with_stats(
            2, "Fast", "快獸", &["Ice"], &["Fighting"], &[], (40, 60, 40, 60, 40, 120),
        );
        let members = roster(&[&slow, &fast]);
        let weaknesses = weakness::aggregate(&members);

        let fighting = strategies_for(&members, &weaknesses, "fighting");
        // 慢獸 tanks, and with everyone weak the overall fastest (快獸) stalls.
        assert!(fighting.guidance[0].contains("慢獸"));
        assert!(fighting.guidance[0].contains("快獸"));
    }

    #[test]
    fn test_only_top_three_weaknesses_covered() {
        let varied = creature(
            1,
            "Varied",
            "雜獸",
            &["Grass"],
            &["Fire", "Ice", "Poison", "Flying"],
            &[],
        );
        let members = roster(&[&varied]);
        let weaknesses = weakness::aggregate(&members);

        let strategies = compose(&members, &weaknesses);
        assert_eq!(strategies.len(), 3);
        assert_eq!(strategies[0].type_id, "fire");
        assert_eq!(strategies[2].type_id, "poison");
    }

    fn strategies_for<'a>(
        members: &[&Creature],
        weaknesses: &'a [WeaknessEntry],
        type_id: &str,
    ) -> CounterStrategy {
        compose(members, weaknesses)
            .into_iter()
            .find(|s| s.type_id == type_id)
            .unwrap_or_else(|| panic!("no strategy for {type_id}"))
    }
}
