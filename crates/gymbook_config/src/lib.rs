use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Where [`load_config_from`] looks for its layers.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Directory holding `default.*` and `{run_env}.*`.
    pub dir: PathBuf,
    /// Name of the environment specific file, e.g. "debug" or "release".
    pub run_env: String,
    /// Prefix of the environment variables layered on top.
    pub env_prefix: String,
}

impl ConfigSources {
    /// Sources derived from the process environment: `GYMBOOK_CONFIG_DIR`
    /// (default `config`), `RUN_ENV` (default `debug`) and `PREFIX`.
    pub fn from_env() -> Self {
        Self {
            dir: env::var("GYMBOOK_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config")),
            run_env: env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string()),
            env_prefix: env_vars::get_config_prefix(),
        }
    }
}

/// Loads the application configuration from `.env`, the config directory and
/// `GYMBOOK__*` environment variables, in increasing priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    load_config_from(&ConfigSources::from_env())
}

/// Loads and validates the configuration from explicit sources.
pub fn load_config_from(sources: &ConfigSources) -> Result<AppConfig, ConfigError> {
    let default_path = sources.dir.join("default");
    let env_path = sources.dir.join(&sources.run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let mut environment = Environment::with_prefix(&sources.env_prefix)
        .separator(env_vars::CONFIG_SEPARATOR)
        .try_parsing(true)
        .list_separator(",");
    for key in env_vars::LIST_KEYS {
        environment = environment.with_list_parse_key(key);
    }

    let builder = Config::builder()
        .add_source(File::with_name(path_str(&default_path)?).required(false))
        .add_source(File::with_name(path_str(&env_path)?).required(false))
        .add_source(environment);

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

fn path_str(path: &Path) -> Result<&str, ConfigError> {
    path.to_str()
        .ok_or_else(|| ConfigError::Message(format!("non UTF-8 config path: {}", path.display())))
}

/// Checks the invariants the rest of the service relies on.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let booking = &config.booking;
    if booking.open_hour >= booking.close_hour || booking.close_hour > 24 {
        return Err(ConfigError::Message(format!(
            "booking hours must satisfy open_hour < close_hour <= 24 (got {}..{})",
            booking.open_hour, booking.close_hour
        )));
    }
    if booking.time_zone.parse::<chrono_tz::Tz>().is_err() {
        return Err(ConfigError::Message(format!(
            "unknown booking.time_zone: {}",
            booking.time_zone
        )));
    }
    Ok(())
}

impl BookingConfig {
    /// The configured zone. Falls back to UTC for a config that skipped [`validate`].
    pub fn tz(&self) -> chrono_tz::Tz {
        self.time_zone.parse().unwrap_or(chrono_tz::UTC)
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, else the first command line argument
/// when it starts with `.env`, else `.env`. Loading happens at most once per
/// process; a missing file is not an error. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sources(dir: &Path) -> ConfigSources {
        ConfigSources {
            dir: dir.to_path_buf(),
            run_env: "test".to_string(),
            // unique prefix so the process environment cannot leak in
            env_prefix: "GYMBOOK_CONFIG_TEST_UNSET".to_string(),
        }
    }

    #[test]
    fn test_empty_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&sources(dir.path())).unwrap();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.booking.open_hour, 9);
        assert_eq!(config.booking.close_hour, 22);
        assert!(config.use_users);
        assert!(config.use_reservations);
    }

    #[test]
    fn test_run_env_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 8080\n[booking]\ntime_zone = \"Asia/Tokyo\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("test.toml"), "[server]\nport = 9090\n").unwrap();

        let config = load_config_from(&sources(dir.path())).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.booking.time_zone, "Asia/Tokyo");
        assert_eq!(config.booking.tz(), chrono_tz::Asia::Tokyo);
        // untouched sections keep their defaults
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_environment_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 8080\n").unwrap();
        let sources = ConfigSources {
            env_prefix: "GYMBOOK_ENV_OVERRIDE_TEST".to_string(),
            ..sources(dir.path())
        };
        env::set_var("GYMBOOK_ENV_OVERRIDE_TEST__SERVER__PORT", "7070");
        env::set_var(
            "GYMBOOK_ENV_OVERRIDE_TEST__SERVER__ALLOWED_ORIGINS",
            "http://a.test,http://b.test",
        );

        let config = load_config_from(&sources).unwrap();

        assert_eq!(config.server.port, 7070);
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_invalid_hours_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[booking]\nopen_hour = 22\nclose_hour = 9\n",
        )
        .unwrap();

        assert!(load_config_from(&sources(dir.path())).is_err());
    }

    #[test]
    fn test_unknown_time_zone_is_rejected() {
        let mut config = AppConfig::default();
        config.booking.time_zone = "Mars/Olympus".to_string();

        assert!(validate(&config).is_err());
        assert_eq!(config.booking.tz(), chrono_tz::UTC);
    }
}
