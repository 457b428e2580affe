//! RegistryResolver - resolves free-text input against the group registry.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Page};
use crate::domain::group::{Group, GroupMatch};
use crate::ports::GroupRepository;

/// Resolves user text against known groups and paginates the listing.
///
/// Resolution priority: an exact case-insensitive match always wins over
/// any number of substring matches. Input length policy is NOT applied
/// here; it belongs to the dialogue engine.
pub struct RegistryResolver {
    groups: Arc<dyn GroupRepository>,
}

impl RegistryResolver {
    pub fn new(groups: Arc<dyn GroupRepository>) -> Self {
        Self { groups }
    }

    /// One page of active groups ordered by name.
    pub async fn list_page(&self, page: u32) -> Result<Page<Group>, DomainError> {
        self.groups.list_active_page(page).await
    }

    /// Resolves trimmed user text to a [`GroupMatch`].
    pub async fn resolve(&self, text: &str) -> Result<GroupMatch, DomainError> {
        let text = text.trim();

        let exact = self.groups.find_exact(text).await?;
        if !exact.is_empty() {
            tracing::debug!(query = text, hits = exact.len(), "exact registry match");
            return Ok(GroupMatch::Exact(exact));
        }

        let mut candidates = self.groups.find_substring(text).await?;
        tracing::debug!(
            query = text,
            hits = candidates.len(),
            "substring registry match"
        );
        match candidates.len() {
            0 => Ok(GroupMatch::None),
            1 => Ok(GroupMatch::Single(candidates.remove(0))),
            _ => Ok(GroupMatch::Many(candidates)),
        }
    }

    /// Case-insensitive exact existence check.
    pub async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        self.groups.exists(name.trim()).await
    }
}
