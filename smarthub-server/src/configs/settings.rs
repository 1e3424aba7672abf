use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub migration_path: Option<String>,
    pub clean_start: bool,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sunset {
    pub endpoint: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Upper bound for a single lookup, the upstream call is never retried
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clock {
    /// Local wall-clock offset such as `-05:00`, follows the host time zone when unset
    pub utc_offset: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
    pub sunset: Sunset,
    #[serde(default)]
    pub clock: Clock,
    #[serde(default)]
    pub cors: Cors,
}

fn default_max_connections() -> u32 {
    10
}

// `SMARTHUB_SUNSET__TIMEOUT_SECS`, keys themselves contain `_`
fn environment() -> Environment {
    Environment::with_prefix("SMARTHUB")
        .prefix_separator("_")
        .separator("__")
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        if let Some(migrate) = &settings.database.migration_path {
            if Path::new(migrate).is_dir() {
                let migrate_path = Path::new(migrate)
                    .canonicalize()
                    .map_err(|e| ConfigError::Message(e.to_string()))?
                    .to_string_lossy()
                    .to_string();

                settings.database.migration_path = Some(migrate_path);
            } else {
                settings.database.migration_path = None;
            }
        }

        if settings.sunset.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "sunset.timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(settings)
    }
}
