//! HTTP host for the triage engine. The engine itself is transport
//! agnostic; this is the reference deployment surface.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
