//! Console transport for the interactive dev harness.
//!
//! Prints directives to stdout so the dialogue can be exercised from a
//! terminal without any chat network. Buttons are printed with their
//! callback tokens; the harness accepts those tokens back as input.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::dialogue::Keyboard;
use crate::domain::foundation::{ChatId, DomainError, MessageId};
use crate::ports::Transport;

/// Transport that renders everything as text on stdout.
#[derive(Debug, Default)]
pub struct ConsoleTransport {
    next_message_id: AtomicI64,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the most recently sent message, for harness callbacks.
    pub fn last_message_id(&self) -> MessageId {
        MessageId::new(self.next_message_id.load(Ordering::Relaxed))
    }

    fn print_keyboard(keyboard: &Keyboard) {
        for row in &keyboard.rows {
            let rendered: Vec<String> = row
                .iter()
                .map(|b| format!("[{} -> {}]", b.label, b.token))
                .collect();
            println!("    {}", rendered.join(" "));
        }
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageId, DomainError> {
        let id = self.next_message_id.fetch_add(1, Ordering::Relaxed) + 1;
        println!("-> chat {} (message {}): {}", chat, id, text);
        if let Some(keyboard) = keyboard {
            Self::print_keyboard(keyboard);
        }
        Ok(MessageId::new(id))
    }

    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), DomainError> {
        println!("-> chat {} (edit message {}): {}", chat, message, text);
        if let Some(keyboard) = keyboard {
            Self::print_keyboard(keyboard);
        }
        Ok(())
    }

    async fn acknowledge(&self, text: Option<&str>, alert: bool) -> Result<(), DomainError> {
        match (text, alert) {
            (Some(text), true) => println!("-> alert: {}", text),
            (Some(text), false) => println!("-> ack: {}", text),
            (None, _) => println!("-> ack"),
        }
        Ok(())
    }
}
