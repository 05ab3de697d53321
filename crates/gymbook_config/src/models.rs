// --- File: crates/gymbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built web client, served for unmatched paths.
    pub static_dir: Option<String>,
    /// CORS origins. Empty or containing "*" allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            static_dir: None,
            allowed_origins: Vec::new(),
        }
    }
}

// --- Storage Config ---
// Both documents live in `data_dir`; file names are relative to it.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub users_file: String,
    pub reservations_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            users_file: "users.json".to_string(),
            reservations_file: "reservations.json".to_string(),
        }
    }
}

// --- Booking Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    /// First bookable hour (inclusive).
    pub open_hour: u32,
    /// Closing hour (exclusive): the last slot ends here.
    pub close_hour: u32,
    /// IANA zone used to decide what "today" is.
    pub time_zone: String,
    /// Reject booking and cancelling after 23:59:59 of the previous day.
    pub enforce_deadline: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            open_hour: 9,
            close_hour: 22,
            time_zone: "UTC".to_string(),
            enforce_deadline: false,
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are also written to a daily rotated file in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

fn enabled() -> bool {
    true
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to true) ---
    #[serde(default = "enabled")]
    pub use_users: bool,
    #[serde(default = "enabled")]
    pub use_reservations: bool,

    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            use_users: true,
            use_reservations: true,
            storage: StorageConfig::default(),
            booking: BookingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
