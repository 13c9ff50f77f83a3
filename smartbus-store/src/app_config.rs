use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub ai_service: AiServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Without a URL the relay keeps everything in memory.
    pub url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiServiceConfig {
    pub base_url: String,
    /// No timeout unless set.
    pub timeout_seconds: Option<u64>,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.port", 3000_i64)?
        .set_default("database.max_connections", 5_i64)?
        .set_default("database.run_migrations", true)?
        .set_default("ai_service.base_url", "http://localhost:8000")
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SMARTBUS__AI_SERVICE__BASE_URL=http://ai:8000`
            .add_source(config::Environment::with_prefix("SMARTBUS").separator("__"))
            // Plain variables injected by the hosting platform win over everything else
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("ai_service.base_url", env::var("AI_SERVICE_URL").ok())?
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        s.try_deserialize()
    }

    /// Built-in defaults plus explicit key/value overrides, ignoring files and the environment.
    pub fn with_overrides(overrides: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut builder = defaults()?;
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        builder.build()?.try_deserialize()
    }
}
