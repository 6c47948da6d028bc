//! Configuration management for the ScrollForge server

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: Option<String>,
    /// Base URL pages are publicly reachable under. Falls back to
    /// path-style `{endpoint}/{bucket}` when unset.
    pub public_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            storage: StorageConfig {
                endpoint: "http://localhost:9000".to_string(),
                bucket: "html-pages".to_string(),
                access_key: "admin".to_string(),
                secret_key: "password123".to_string(),
                region: Some("us-east-1".to_string()),
                public_url: None,
            },
            database: DatabaseConfig {
                url: "sqlite:./scrollforge.db".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
            },
            storage: StorageConfig {
                endpoint: env::var("S3_ENDPOINT")?,
                bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "html-pages".to_string()),
                access_key: env::var("S3_ACCESS_KEY")?,
                secret_key: env::var("S3_SECRET_KEY")?,
                region: env::var("S3_REGION").ok(),
                public_url: env::var("S3_PUBLIC_URL").ok(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:./scrollforge.db".to_string()),
            },
        })
    }
}
