//! DirectiveDispatcher - executes engine directives through the transport.

use std::sync::Arc;

use crate::domain::dialogue::ReplyDirective;
use crate::domain::foundation::DomainError;
use crate::ports::Transport;

/// Walks a directive list in order and performs each one on the transport.
///
/// Order matters: the engine emits edits before acknowledgements and
/// acknowledgements before follow-up messages, mirroring what the user
/// should perceive.
pub struct DirectiveDispatcher {
    transport: Arc<dyn Transport>,
}

impl DirectiveDispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn dispatch(&self, directives: Vec<ReplyDirective>) -> Result<(), DomainError> {
        for directive in directives {
            match directive {
                ReplyDirective::Send {
                    chat,
                    text,
                    keyboard,
                } => {
                    self.transport
                        .send_message(chat, &text, keyboard.as_ref())
                        .await?;
                }
                ReplyDirective::Edit {
                    chat,
                    message,
                    text,
                    keyboard,
                } => {
                    self.transport
                        .edit_message(chat, message, &text, keyboard.as_ref())
                        .await?;
                }
                ReplyDirective::Acknowledge { text, alert } => {
                    self.transport.acknowledge(text.as_deref(), alert).await?;
                }
            }
        }
        Ok(())
    }
}
