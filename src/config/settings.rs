//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SEVERITY_MODEL_PATH,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Redis is optional; rate limits are counted per process without it.
    pub redis_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub severity_model_path: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("redis_url", &self.redis_url.as_ref().map(|_| "[REDACTED]"))
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("severity_model_path", &self.severity_model_path)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            severity_model_path: env::var("SEVERITY_MODEL_PATH")
                .unwrap_or_else(|_| DEFAULT_SEVERITY_MODEL_PATH.to_string()),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_urls() {
        let config = Config {
            database_url: "postgres://secret@db/registry".to_string(),
            redis_url: Some("redis://secret@cache".to_string()),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            severity_model_path: DEFAULT_SEVERITY_MODEL_PATH.to_string(),
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
