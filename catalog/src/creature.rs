//! Creature records as loaded from the cleaned catalog JSON

use serde::{Deserialize, Serialize};

use crate::types::{self, TypeTag};

/// Base stat block. All stats are non-negative; the camelCase field names
/// match the cleaned catalog JSON produced by the data-preparation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(rename = "specialAttack")]
    pub special_attack: u32,
    #[serde(rename = "specialDefense")]
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Physical plus special defense, the replacement-ranking key
    pub fn total_defense(&self) -> u32 {
        self.defense + self.special_defense
    }

    /// Combined staying power used by role scoring and stall guidance
    pub fn bulk(&self) -> u32 {
        self.hp + self.defense + self.special_defense
    }
}

/// An immutable catalog creature. Loaded wholesale at process start;
/// never created or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    /// Canonical (English) name
    pub name: String,
    /// Localized display name
    #[serde(rename = "chineseName")]
    pub local_name: String,
    #[serde(rename = "japaneseName", default, skip_serializing_if = "Option::is_none")]
    pub japanese_name: Option<String>,
    /// 1-2 elemental types, order-preserving
    pub types: Vec<String>,
    /// Types dealing amplified damage to this creature
    pub weaknesses: Vec<String>,
    /// Types dealing reduced damage to this creature
    pub resistances: Vec<String>,
    pub image: String,
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<String>>,
}

impl Creature {
    /// Localized name used in human-readable report text
    pub fn display_name(&self) -> &str {
        &self.local_name
    }

    /// Case-insensitive match against the canonical or localized name
    pub fn matches_name(&self, requested: &str) -> bool {
        self.name.eq_ignore_ascii_case(requested)
            || self.local_name.to_lowercase() == requested.to_lowercase()
    }

    /// Normalized weakness tags, in data order
    pub fn weakness_tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.weaknesses.iter().map(|w| TypeTag::new(w))
    }

    /// Whether this creature is weak to the given type
    pub fn is_weak_to(&self, tag: &TypeTag) -> bool {
        self.weaknesses.iter().any(|w| TypeTag::new(w) == *tag)
    }

    /// Whether this creature resists the given type
    pub fn resists(&self, tag: &TypeTag) -> bool {
        self.resistances.iter().any(|r| TypeTag::new(r) == *tag)
    }

    /// Whether the creature has the given elemental type
    pub fn has_type(&self, tag: &TypeTag) -> bool {
        self.types.iter().any(|t| TypeTag::new(t) == *tag)
    }

    /// Whether any of this creature's own types is amplified against the
    /// given defending type
    pub fn counters_type(&self, defender: &TypeTag) -> bool {
        self.types
            .iter()
            .any(|t| types::is_counter(&TypeTag::new(t), defender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> Creature {
        Creature {
            id: 25,
            name: "Pikachu".to_string(),
            local_name: "皮卡丘".to_string(),
            japanese_name: None,
            types: vec!["Electric".to_string()],
            weaknesses: vec!["Ground".to_string()],
            resistances: vec!["Flying".to_string(), "Steel".to_string(), "Electric".to_string()],
            image: String::new(),
            stats: Stats {
                hp: 35,
                attack: 55,
                defense: 40,
                special_attack: 50,
                special_defense: 50,
                speed: 90,
            },
            moves: None,
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let p = pikachu();
        assert!(p.matches_name("pikachu"));
        assert!(p.matches_name("PIKACHU"));
        assert!(p.matches_name("皮卡丘"));
        assert!(!p.matches_name("Raichu"));
    }

    #[test]
    fn test_membership_checks_normalize() {
        let p = pikachu();
        assert!(p.is_weak_to(&TypeTag::new("ground")));
        assert!(p.is_weak_to(&TypeTag::new("Ground")));
        assert!(p.resists(&TypeTag::new("steel")));
        assert!(p.has_type(&TypeTag::new("electric")));
        assert!(!p.is_weak_to(&TypeTag::new("water")));
    }

    #[test]
    fn test_counters_type() {
        // Electric is amplified against water and flying
        let p = pikachu();
        assert!(p.counters_type(&TypeTag::new("water")));
        assert!(p.counters_type(&TypeTag::new("flying")));
        assert!(!p.counters_type(&TypeTag::new("grass")));
    }

    #[test]
    fn test_stat_sums() {
        let s = pikachu().stats;
        assert_eq!(s.total_defense(), 90);
        assert_eq!(s.bulk(), 125);
    }

    #[test]
    fn test_deserializes_cleaned_json_shape() {
        let raw = r#"{
            "id": 6,
            "name": "Charizard",
            "chineseName": "噴火龍",
            "japaneseName": "リザードン",
            "types": ["Fire", "Flying"],
            "weaknesses": ["Rock", "Water", "Electric"],
            "resistances": ["Bug", "Steel", "Fire", "Grass", "Fairy", "Fighting"],
            "image": "/charizard.png",
            "stats": {
                "hp": 78,
                "attack": 84,
                "defense": 78,
                "specialAttack": 109,
                "specialDefense": 85,
                "speed": 100
            },
            "moves": ["Flamethrower", "Air Slash"]
        }"#;

        let c: Creature = serde_json::from_str(raw).unwrap();
        assert_eq!(c.id, 6);
        assert_eq!(c.display_name(), "噴火龍");
        assert_eq!(c.types, vec!["Fire", "Flying"]);
        assert_eq!(c.stats.special_attack, 109);
        assert_eq!(c.moves.as_deref(), Some(&["Flamethrower".to_string(), "Air Slash".to_string()][..]));
    }
}
