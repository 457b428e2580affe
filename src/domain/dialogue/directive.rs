//! Reply directives emitted by the dialogue engine.
//!
//! Directives are the engine's entire outward surface: the transport
//! adapter translates them into whatever its network encoding is. The
//! engine never calls the transport directly.

use crate::domain::dialogue::Keyboard;
use crate::domain::foundation::{ChatId, MessageId};

/// One instruction for the transport collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyDirective {
    /// Send a new message to a chat.
    Send {
        chat: ChatId,
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Edit a previously sent message in place.
    Edit {
        chat: ChatId,
        message: MessageId,
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Acknowledge the triggering button press, optionally with a short
    /// notice. `alert` asks the client for a prominent popup.
    Acknowledge { text: Option<String>, alert: bool },
}

impl ReplyDirective {
    pub fn send(chat: ChatId, text: impl Into<String>) -> Self {
        ReplyDirective::Send {
            chat,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn send_with_keyboard(chat: ChatId, text: impl Into<String>, keyboard: Keyboard) -> Self {
        ReplyDirective::Send {
            chat,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    pub fn edit_with_keyboard(
        chat: ChatId,
        message: MessageId,
        text: impl Into<String>,
        keyboard: Keyboard,
    ) -> Self {
        ReplyDirective::Edit {
            chat,
            message,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    /// Silent acknowledgement.
    pub fn ack() -> Self {
        ReplyDirective::Acknowledge {
            text: None,
            alert: false,
        }
    }

    /// Acknowledgement with a short notice.
    pub fn ack_with(text: impl Into<String>) -> Self {
        ReplyDirective::Acknowledge {
            text: Some(text.into()),
            alert: false,
        }
    }

    /// Acknowledgement shown as a prominent alert.
    pub fn alert(text: impl Into<String>) -> Self {
        ReplyDirective::Acknowledge {
            text: Some(text.into()),
            alert: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_variants_set_the_alert_flag() {
        assert_eq!(
            ReplyDirective::ack(),
            ReplyDirective::Acknowledge {
                text: None,
                alert: false
            }
        );
        assert_eq!(
            ReplyDirective::alert("Insufficient rights"),
            ReplyDirective::Acknowledge {
                text: Some("Insufficient rights".to_string()),
                alert: true
            }
        );
    }

    #[test]
    fn send_without_keyboard_has_none() {
        let d = ReplyDirective::send(ChatId::new(1), "hi");
        assert!(matches!(d, ReplyDirective::Send { keyboard: None, .. }));
    }
}
