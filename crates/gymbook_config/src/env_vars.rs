//! Environment variable naming for the Gymbook configuration.
//!
//! Configuration keys map onto environment variables as
//! `{PREFIX}__{SECTION}__{KEY}`, e.g. `booking.time_zone` becomes
//! `GYMBOOK__BOOKING__TIME_ZONE`.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "GYMBOOK";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Keys parsed as comma separated lists when read from the environment.
pub const LIST_KEYS: &[&str] = &["server.allowed_origins"];

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}
