//! Team analysis engine for the triad roster advisor.
//!
//! Given a roster of up to three creature names and the static catalog,
//! this crate produces a complete matchup report: aggregated weaknesses,
//! ranked counter-threats, replacement suggestions, a suggested
//! deployment order, and prioritized counter-strategy guidance.
//!
//! ```text
//! triad-catalog (static data)
//!        │
//!        ▼
//! triad-advisor (analysis engine)  ← THIS CRATE
//!        │
//!        ▼
//! presentation layer (serializes TeamReport as JSON)
//! ```
//!
//! Every analysis is a pure, idempotent function of the request and the
//! catalog: no state between calls, no I/O, identical input gives an
//! identical report.
//!
//! # Example
//!
//! ```no_run
//! use triad_advisor::analyze;
//! use triad_catalog::Catalog;
//!
//! let catalog = Catalog::load("data/creatures.json")?;
//! let roster = vec!["Pikachu".to_string(), "Squirtle".to_string()];
//! let report = analyze(&catalog, &roster)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod engine;
pub mod report;

pub use engine::{analyze, MAX_ROSTER};
pub use error::AdvisorError;
pub use report::{
    CounterStrategy, DeploymentPlan, Priority, ReplacementEntry, Role, RoleAssignment, TeamReport,
    ThreatEntry, WeaknessEntry,
};
