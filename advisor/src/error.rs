use thiserror::Error;

/// Request-level failures. Unmatched names on their own are not errors;
/// they ride along in the report's `unmatched` list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Provide a list of creature names")]
    EmptyRoster,

    #[error("A roster holds at most 3 creatures ({got} names requested)")]
    RosterTooLarge { got: usize },

    #[error("No requested creatures found: {}", .requested.join(", "))]
    NoneMatched { requested: Vec<String> },
}
