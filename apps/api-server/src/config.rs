//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Base URL of the object store/CDN; avatar upload is unavailable
    /// without it.
    pub media_base_url: Option<String>,
    /// Base URL of the grammar service; suggestions are empty without it.
    pub grammar_base_url: Option<String>,
    /// Userinfo endpoint of the federated identity provider.
    pub federation_userinfo_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            media_base_url: env::var("MEDIA_BASE_URL").ok(),
            grammar_base_url: env::var("GRAMMAR_BASE_URL").ok(),
            federation_userinfo_url: env::var("FEDERATION_USERINFO_URL").ok(),
        }
    }
}
