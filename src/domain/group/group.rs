//! Group entity.
//!
//! Groups live in the registry owned by the storage collaborator. They are
//! never hard-deleted; deactivation hides them from listing and resolution.

use crate::domain::foundation::{GroupId, ValidationError};
use serde::{Deserialize, Serialize};

/// Minimum length for a group name, applied to free-text input before any
/// registry lookup or request creation.
pub const MIN_NAME_LENGTH: usize = 2;

/// A registered group.
///
/// # Invariants
///
/// - `name` is unique case-insensitively across the registry
/// - inactive groups never appear in listings or resolution results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    active: bool,
}

impl Group {
    /// Reconstitute a group from persistence (no validation).
    pub fn reconstitute(id: GroupId, name: String, active: bool) -> Self {
        Self { id, name, active }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Case-insensitive name comparison key.
    pub fn name_key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalizes a name for case-insensitive comparison: trimmed, lowercased.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validates free-text input as a candidate group name.
///
/// Returns the trimmed name on success. Length policy belongs to the
/// dialogue layer, which is the only caller.
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::too_short(
            "name",
            MIN_NAME_LENGTH,
            name.chars().count(),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_ignores_case_and_surrounding_whitespace() {
        let a = Group::reconstitute(GroupId::new(1), " CS101 ".to_string(), true);
        let b = Group::reconstitute(GroupId::new(2), "cs101".to_string(), true);
        assert_eq!(a.name_key(), b.name_key());
    }

    #[test]
    fn validate_name_trims_input() {
        assert_eq!(validate_name("  Math101  ").unwrap(), "Math101");
    }

    #[test]
    fn validate_name_rejects_short_input() {
        let err = validate_name("x").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));
    }

    #[test]
    fn validate_name_rejects_whitespace_only_input() {
        let err = validate_name("   ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }
}
