use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "PhysioAssist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on an incoming chat message, enforced at the HTTP edge.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,physioassist=debug".into()
}

/// Bind address for the chat API server.
/// Overridable via PHYSIOASSIST_ADDR (e.g. "0.0.0.0:8700").
pub fn bind_addr() -> SocketAddr {
    std::env::var("PHYSIOASSIST_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8700)))
}
