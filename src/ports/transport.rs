//! Transport port.
//!
//! The outbound half of the chat transport: sending, editing, and
//! acknowledging. Implementations are bound to the event being handled, so
//! `acknowledge` needs no event identifier here.

use crate::domain::dialogue::Keyboard;
use crate::domain::foundation::{ChatId, DomainError, MessageId};
use async_trait::async_trait;

/// Outbound chat operations executed on behalf of the engine.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a new message, returning its transport-assigned identity.
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageId, DomainError>;

    /// Edits an existing message in place.
    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), DomainError>;

    /// Acknowledges the button press that triggered the current handler.
    async fn acknowledge(&self, text: Option<&str>, alert: bool) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_is_object_safe() {
        fn _accepts_dyn(_transport: &dyn Transport) {}
    }
}
