//! Recording transport for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::dialogue::Keyboard;
use crate::domain::foundation::{ChatId, DomainError, MessageId};
use crate::ports::Transport;

/// One executed transport operation, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum SentItem {
    Message {
        chat: ChatId,
        text: String,
        keyboard: Option<Keyboard>,
        assigned: MessageId,
    },
    Edit {
        chat: ChatId,
        message: MessageId,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Ack {
        text: Option<String>,
        alert: bool,
    },
}

/// Transport that remembers everything it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    items: Arc<Mutex<Vec<SentItem>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything executed so far, in order.
    pub async fn sent(&self) -> Vec<SentItem> {
        self.items.lock().await.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<MessageId, DomainError> {
        let mut items = self.items.lock().await;
        let assigned = MessageId::new(items.len() as i64 + 1);
        items.push(SentItem::Message {
            chat,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
            assigned,
        });
        Ok(assigned)
    }

    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), DomainError> {
        let mut items = self.items.lock().await;
        items.push(SentItem::Edit {
            chat,
            message,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn acknowledge(&self, text: Option<&str>, alert: bool) -> Result<(), DomainError> {
        let mut items = self.items.lock().await;
        items.push(SentItem::Ack {
            text: text.map(str::to_string),
            alert,
        });
        Ok(())
    }
}
