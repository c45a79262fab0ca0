//! Elemental type tags, localized labels, and effectiveness lookups

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized elemental-type identifier (lowercased, trimmed).
///
/// Catalog data carries type names as free-form strings, so tags are not a
/// closed enum: identifiers outside [`KNOWN_TYPES`] are preserved as-is and
/// simply have no localized label, no counters, and no notable moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    /// Normalize an arbitrary type name into a tag
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The normalized identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Localized display label, or the identifier itself for unknown tags
    pub fn label(&self) -> &str {
        label_for(&self.0)
    }

    /// Whether this is one of the 18 canonical types
    pub fn is_known(&self) -> bool {
        KNOWN_TYPES.contains(&self.0.as_str())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The 18 canonical type identifiers, in chart order
pub const KNOWN_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Localized (Traditional Chinese) display labels for the canonical types
static TYPE_LABELS: [(&str, &str); 18] = [
    ("normal", "一般"),
    ("fire", "火"),
    ("water", "水"),
    ("electric", "電"),
    ("grass", "草"),
    ("ice", "冰"),
    ("fighting", "格鬥"),
    ("poison", "毒"),
    ("ground", "地面"),
    ("flying", "飛行"),
    ("psychic", "超能力"),
    ("bug", "蟲"),
    ("rock", "岩石"),
    ("ghost", "幽靈"),
    ("dragon", "龍"),
    ("dark", "惡"),
    ("steel", "鋼"),
    ("fairy", "妖精"),
];

/// Defending type -> attacking types that deal amplified damage to it.
///
/// The `"psych"` entry under `poison` is a long-standing typo in the source
/// data. Unknown identifiers are uniformly no-effect, so the entry never
/// matches a real creature type and is kept verbatim rather than guessed at.
static COUNTER_TABLE: [(&str, &[&str]); 18] = [
    ("normal", &["fighting"]),
    ("fire", &["water", "ground", "rock"]),
    ("water", &["electric", "grass"]),
    ("electric", &["ground"]),
    ("grass", &["fire", "ice", "poison", "flying", "bug"]),
    ("ice", &["fire", "fighting", "rock", "steel"]),
    ("fighting", &["flying", "psychic", "fairy"]),
    ("poison", &["ground", "psych"]),
    ("ground", &["water", "grass", "ice"]),
    ("flying", &["electric", "ice", "rock"]),
    ("psychic", &["bug", "ghost", "dark"]),
    ("bug", &["fire", "flying", "rock"]),
    ("rock", &["fighting", "steel", "ground", "water", "grass"]),
    ("ghost", &["ghost", "dark"]),
    ("dragon", &["ice", "dragon", "fairy"]),
    ("dark", &["fighting", "bug", "fairy"]),
    ("steel", &["fire", "fighting", "ground"]),
    ("fairy", &["poison", "steel"]),
];

/// A few signature offensive moves per type, surfaced in weakness reports
static NOTABLE_MOVES: [(&str, &[&str]); 18] = [
    ("normal", &["Hyper Beam", "Body Slam"]),
    ("fire", &["Flamethrower", "Fire Blast"]),
    ("water", &["Hydro Pump", "Surf"]),
    ("electric", &["Thunderbolt", "Thunder"]),
    ("grass", &["Energy Ball", "Leaf Storm"]),
    ("ice", &["Ice Beam", "Blizzard"]),
    ("fighting", &["Close Combat", "Brick Break"]),
    ("poison", &["Sludge Bomb", "Toxic"]),
    ("ground", &["Earthquake", "Earth Power"]),
    ("flying", &["Brave Bird", "Hurricane"]),
    ("psychic", &["Psychic", "Psyshock"]),
    ("bug", &["Bug Buzz", "X-Scissor"]),
    ("rock", &["Stone Edge", "Rock Slide"]),
    ("ghost", &["Shadow Ball", "Phantom Force"]),
    ("dragon", &["Draco Meteor", "Dragon Claw"]),
    ("dark", &["Dark Pulse", "Crunch"]),
    ("steel", &["Iron Head", "Flash Cannon"]),
    ("fairy", &["Moonblast", "Play Rough"]),
];

fn label_for(id: &str) -> &str {
    TYPE_LABELS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
        // Pass-through display for identifiers outside the label table
        .unwrap_or(id)
}

/// Attacking types that are amplified against the given defending type.
/// Unknown tags have no counters.
pub fn counters(defender: &TypeTag) -> &'static [&'static str] {
    COUNTER_TABLE
        .iter()
        .find(|(key, _)| *key == defender.as_str())
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

/// Signature offensive moves of the given type. Unknown tags have none.
pub fn notable_moves(tag: &TypeTag) -> &'static [&'static str] {
    NOTABLE_MOVES
        .iter()
        .find(|(key, _)| *key == tag.as_str())
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

/// Whether `attacker` is amplified against the defending type
pub fn is_counter(attacker: &TypeTag, defender: &TypeTag) -> bool {
    counters(defender).contains(&attacker.as_str())
}
