//! The analysis engine: a pure, idempotent function of
//! (roster request, static catalogs)

mod order;
mod replacement;
mod strategy;
mod threat;
mod weakness;

use triad_catalog::{Catalog, Creature};

use crate::error::AdvisorError;
use crate::report::TeamReport;

/// A roster holds at most this many creatures
pub const MAX_ROSTER: usize = 3;

/// Weakness types considered by threat and strategy analysis
const TOP_WEAKNESSES: usize = 3;

/// Display counts for ranked lists
const MAX_THREATS: usize = 5;
const MAX_REPLACEMENTS: usize = 3;

/// Analyze a requested roster against the catalog.
///
/// Names are matched case-insensitively against canonical or localized
/// names. Unmatched names are collected into the report rather than
/// aborting; analysis proceeds on the matched subset. The computation is
/// pure: identical input yields an identical report.
pub fn analyze(catalog: &Catalog, names: &[String]) -> Result<TeamReport, AdvisorError> {
    if names.is_empty() {
        return Err(AdvisorError::EmptyRoster);
    }
    if names.len() > MAX_ROSTER {
        return Err(AdvisorError::RosterTooLarge { got: names.len() });
    }

    let mut members: Vec<&Creature> = Vec::new();
    let mut unmatched: Vec<String> = Vec::new();
    for name in names {
        match catalog.find(name) {
            Some(creature) => members.push(creature),
            None => {
                tracing::debug!(name = %name, "no catalog match for requested name");
                unmatched.push(name.clone());
            }
        }
    }

    if members.is_empty() {
        return Err(AdvisorError::NoneMatched {
            requested: names.to_vec(),
        });
    }

    let weaknesses = weakness::aggregate(&members);
    let threats = threat::identify(catalog, &members, &weaknesses);
    let replacements = replacement::suggest(catalog, weaknesses.first());
    let deployment = order::plan(&members);
    let strategies = strategy::compose(&members, &weaknesses);

    Ok(TeamReport {
        members: members.into_iter().cloned().collect(),
        unmatched,
        weaknesses,
        threats,
        replacements,
        deployment,
        strategies,
    })
}
