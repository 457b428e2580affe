//! Session store port.
//!
//! Holds per-user dialogue state. The contract is deliberately infallible:
//! an absent entry reads as the idle session, and writes cannot fail. The
//! default implementation is an in-process map; the trait exists so a
//! distributed cache could replace it without touching the engine.

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::UserId;
use async_trait::async_trait;

/// Storage for ephemeral per-user conversation state.
///
/// Concurrent events for one user may interleave reads and writes; the
/// accepted conflict policy is last-writer-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The user's current session; idle when none is recorded.
    async fn get(&self, user: UserId) -> DialogueSession;

    /// Overwrites the user's session.
    async fn set(&self, user: UserId, session: DialogueSession);

    /// Removes the user's session, returning them to idle.
    async fn clear(&self, user: UserId);
}
