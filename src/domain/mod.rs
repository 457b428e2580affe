//! Domain layer - entities, value objects, and the dialogue vocabulary.

pub mod dialogue;
pub mod foundation;
pub mod group;
pub mod request;
pub mod user;
