use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    #[serde(flatten)]
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl MongoConfig {
    /// Connection string for the configured MongoDB instance.
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }
}

impl ItemConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        // Server settings come from the optional configuration file and the
        // APP__ environment prefix; storage settings from plain env vars.
        let server = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(ItemConfig {
            server,
            mongodb: MongoConfig {
                host: get_env("MONGO_HOST", "mongo"),
                port: get_env("MONGO_PORT", "27017").parse().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("invalid MONGO_PORT: {}", e))
                })?,
                database: get_env("MONGO_DB", "appdb"),
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
