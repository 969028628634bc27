//! Input normalization. Every matcher downstream (safety, category,
//! command, treatment name) assumes text has been through here.

/// Lowercase + trim. Total, never fails, no side effects.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
