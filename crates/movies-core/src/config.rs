//! Configuration management for movie catalog services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`MOVIES__` prefix, `__` separator,
//!    e.g. `MOVIES__NEO4J__URI`)
//! 2. Config file (`movies.toml`, or another prefix)
//! 3. Defaults

use serde::Deserialize;

use crate::error::MoviesError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviesConfig {
    #[serde(default)]
    pub neo4j: Neo4jSettings,
}

impl MoviesConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and the environment.
    pub fn load(file_prefix: &str) -> Result<Self, MoviesError> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::with_name(file_prefix).required(false))
            .add_source(
                ::config::Environment::with_prefix("MOVIES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = cfg.try_deserialize()?;
        tracing::debug!(
            uri = %loaded.neo4j.uri,
            database = ?loaded.neo4j.selected_database(),
            "Loaded configuration"
        );
        Ok(loaded)
    }
}

/// Neo4j connection settings, `[neo4j]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Database to open sessions against.
    #[serde(default = "default_database")]
    pub database: String,

    /// Server version, when known. 3.x servers have a single database.
    #[serde(default)]
    pub server_version: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

impl Neo4jSettings {
    /// The database to select, or `None` to use the server default.
    pub fn selected_database(&self) -> Option<&str> {
        let legacy = self
            .server_version
            .as_deref()
            .is_some_and(|v| v.trim_start().starts_with('3'));

        if legacy || self.database.is_empty() {
            None
        } else {
            Some(&self.database)
        }
    }
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "movies".to_string()
}

fn default_database() -> String {
    "movies".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            database: default_database(),
            server_version: None,
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}
