//! System-wide constants for the liveboard scoreboard engine.

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Liveboard";
