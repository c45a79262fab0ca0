//! The structured analysis record returned across the request boundary.
//!
//! Everything here is ephemeral: rebuilt on every request, serialized for
//! the presentation layer, never cached or stored.

use serde::Serialize;

use triad_catalog::Creature;

/// Complete analysis of one roster request
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    /// Matched roster members, in request order
    pub members: Vec<Creature>,
    /// Requested names with no catalog match
    pub unmatched: Vec<String>,
    /// Aggregated weaknesses, descending by count
    pub weaknesses: Vec<WeaknessEntry>,
    /// Catalog creatures best placed to exploit the top weaknesses
    pub threats: Vec<ThreatEntry>,
    /// Catalog creatures that resist the top weakness
    pub replacements: Vec<ReplacementEntry>,
    /// Suggested deployment order with explanations
    pub deployment: DeploymentPlan,
    /// Prioritized guidance for the top weakness types
    pub strategies: Vec<CounterStrategy>,
}

/// One aggregated weakness type
#[derive(Debug, Clone, Serialize)]
pub struct WeaknessEntry {
    /// Normalized type identifier
    pub type_id: String,
    /// Localized display label (identifier itself for unknown types)
    pub label: String,
    /// Roster members weak to this type
    pub count: u32,
    /// Display names of the affected members
    pub affected: Vec<String>,
    /// Signature offensive moves of this type
    pub notable_moves: Vec<String>,
}

/// A catalog creature ranked by how well it exploits the roster
#[derive(Debug, Clone, Serialize)]
pub struct ThreatEntry {
    pub id: u32,
    pub name: String,
    pub local_name: String,
    pub types: Vec<String>,
    /// attack + special attack + 50 per threatened member
    pub score: u32,
    /// Display names of the roster members this creature threatens
    pub threatens: Vec<String>,
    pub justification: String,
}

/// A catalog creature that resists the roster's top weakness
#[derive(Debug, Clone, Serialize)]
pub struct ReplacementEntry {
    pub id: u32,
    pub name: String,
    pub local_name: String,
    pub types: Vec<String>,
    /// defense + special defense, the ranking key
    pub total_defense: u32,
}

/// Battle roles, in deployment sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Lead: strikes first
    Pioneer,
    /// Mid: balanced pivot
    Core,
    /// Closer: absorbs and finishes
    Anchor,
}

/// One role assignment with its supporting numbers
#[derive(Debug, Clone, Serialize)]
pub struct RoleAssignment {
    pub role: Role,
    /// Localized display name of the assigned member
    pub name: String,
    pub speed: u32,
    pub attack: u32,
    /// hp + defense + special defense
    pub staying_power: u32,
    pub explanation: String,
}

/// Suggested deployment sequence: pioneer, core, anchor
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentPlan {
    pub order: Vec<RoleAssignment>,
}

/// Guidance priority; "high" when a weakness affects two or more members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// Prioritized guidance against one threat type
#[derive(Debug, Clone, Serialize)]
pub struct CounterStrategy {
    pub type_id: String,
    pub label: String,
    /// Roster members affected by this weakness
    pub affected: u32,
    /// Guidance lines, in priority order
    pub guidance: Vec<String>,
    pub priority: Priority,
}
