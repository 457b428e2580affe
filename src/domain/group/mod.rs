//! Group module - registry entries a user can enroll in.

mod group;
mod resolution;

pub use group::{validate_name, Group, MIN_NAME_LENGTH};
pub(crate) use group::normalize_name;
pub use resolution::{GroupMatch, EXACT_MATCH_CAP, SUBSTRING_MATCH_CAP};
