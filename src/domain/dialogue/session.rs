//! Per-user dialogue session.
//!
//! Ephemeral by design: sessions live in process memory and are lost on
//! restart. A lost session only costs the user a fresh start command.

use serde::{Deserialize, Serialize};

/// The step a user's conversation is currently at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStep {
    /// Group picker is on screen; `page` is the page last rendered.
    AwaitGroupPick { page: u32 },
    /// User was asked to type the name of a group to request.
    AwaitGroupName,
}

/// Ephemeral per-user conversation state.
///
/// The idle session (no step) is the default and is indistinguishable from
/// an absent entry in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueSession {
    step: Option<SessionStep>,
}

impl DialogueSession {
    /// Session with no recorded step.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn at(step: SessionStep) -> Self {
        Self { step: Some(step) }
    }

    pub fn step(&self) -> Option<SessionStep> {
        self.step
    }

    pub fn is_idle(&self) -> bool {
        self.step.is_none()
    }
}
