//! Outcome of resolving free-text input against the registry.

use super::Group;

/// Cap on exact matches returned by resolution.
///
/// More than one exact match means the registry carries duplicate-name
/// anomalies; the cap keeps such data from flooding the reply.
pub const EXACT_MATCH_CAP: usize = 5;

/// Cap on substring matches considered before declaring ambiguity.
pub const SUBSTRING_MATCH_CAP: usize = 10;

/// Result of resolving user text against group names, in priority order.
///
/// An exact case-insensitive hit always wins, regardless of how many
/// substring candidates exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupMatch {
    /// Case-insensitive exact name match (capped at [`EXACT_MATCH_CAP`]).
    Exact(Vec<Group>),
    /// No exact match, exactly one substring match.
    Single(Group),
    /// No exact match, several substring matches; needs explicit selection.
    Many(Vec<Group>),
    /// Nothing matched.
    None,
}

impl GroupMatch {
    /// The unambiguous pick, when resolution produced one.
    ///
    /// For `Exact` with several rows the first row wins, mirroring the
    /// duplicate-anomaly tolerance of the registry.
    pub fn unambiguous(&self) -> Option<&Group> {
        match self {
            GroupMatch::Exact(groups) => groups.first(),
            GroupMatch::Single(group) => Some(group),
            _ => None,
        }
    }
}
