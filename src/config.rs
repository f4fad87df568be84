use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Which profile store implementation to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_backend")]
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    /// Seed the in-memory store with the demo directory
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            database_url: None,
            max_connections: None,
            min_connections: None,
            acquire_timeout_secs: None,
            seed_demo: default_seed_demo(),
        }
    }
}

fn default_store_backend() -> StoreBackend { StoreBackend::Memory }
fn default_seed_demo() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_min_score")]
    pub min_score: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: default_min_score(),
        }
    }
}

impl MatchingSettings {
    /// Effective result limit for a request
    ///
    /// Absent limits use the default; anything above the maximum is capped.
    /// Zero is passed through so the matcher can reject it.
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit) as usize
    }
}

fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }
fn default_min_score() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILL_LINK)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILL_LINK__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_database_url(settings, std::env::var("DATABASE_URL").ok())?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SKILL_LINK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// DATABASE_URL wins over any configured store URL
fn apply_database_url(settings: Config, database_url: Option<String>) -> Result<Config, ConfigError> {
    match database_url {
        Some(url) => Config::builder()
            .add_source(settings)
            .set_override("store.database_url", url)?
            .build(),
        None => Ok(settings),
    }
}
