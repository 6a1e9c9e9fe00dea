use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Postgres DSN. Notes are kept in memory when unset.
    pub database_dsn: Option<String>,
    /// The only origin allowed to make cross-origin requests. `None` disables CORS.
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_dsn: None,
            cors_origin: Some("http://localhost:4200".to_string()),
        }
    }
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load_from_env<F>(lookup: F) -> Result<Config, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();

    let port = match lookup("NOTES_API_PORT") {
        Some(port) => port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse NOTES_API_PORT: {e}"))?,
        None => defaults.port,
    };

    Ok(Config {
        host: lookup("NOTES_API_HOST").unwrap_or(defaults.host),
        port,
        database_dsn: lookup("PG_DSN").filter(|dsn| !dsn.is_empty()),
        cors_origin: match lookup("CORS_ORIGIN") {
            Some(origin) if origin.is_empty() => None,
            Some(origin) => Some(origin),
            None => defaults.cors_origin,
        },
    })
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = env::var("NOTES_API_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'",
            config_path
        );
        return load_from_file("config.example.yaml");
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, loading configuration from environment variables and defaults"
    );
    load_from_env(|key| env::var(key).ok())
}
