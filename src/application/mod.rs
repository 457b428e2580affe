//! Application layer - orchestration over the ports.

mod dispatcher;
mod engine;
mod ledger;
mod resolver;

pub use dispatcher::DirectiveDispatcher;
pub use engine::DialogueEngine;
pub use ledger::{Decision, RequestLedger};
pub use resolver::RegistryResolver;
