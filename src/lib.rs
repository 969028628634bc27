pub mod api; // HTTP host for the triage engine
pub mod catalog; // Treatment catalog + fuzzy name matcher
pub mod config;
pub mod triage; // Pure (message, context) -> response core
