//! The symptom-triage core: a pure function of `(message, context)` into
//! a structured chat response. No I/O, no clock, no session storage;
//! the caller threads context between turns.

pub mod classify;
pub mod command;
pub mod engine;
pub mod messages;
pub mod normalize;
pub mod safety;
pub mod types;

pub use engine::TriageEngine;
pub use types::{ChatResponse, ContextTag, ConversationContext};
