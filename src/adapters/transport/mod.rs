//! Transport adapters.
//!
//! No real chat network lives in this crate; these adapters cover the two
//! local needs: recording directives for tests, and printing them for the
//! interactive dev harness.

mod console;
mod recording;

pub use console::ConsoleTransport;
pub use recording::{RecordingTransport, SentItem};
