//! Dialogue module - the vocabulary of the conversation state machine.
//!
//! Session steps, the callback-token protocol carried by buttons, and the
//! abstract reply directives the engine emits toward the transport.

mod directive;
mod keyboard;
mod session;
mod token;

pub use directive::ReplyDirective;
pub use keyboard::{Button, Keyboard};
pub use session::{DialogueSession, SessionStep};
pub use token::{CallbackToken, TokenParseError};
