//! Service configuration.

use registrar_store::sqlite::DEFAULT_MAX_CONNECTIONS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:5002").
    pub listen_addr: String,

    /// SQLite connection URL (default: "sqlite://registrar.db").
    pub database_url: String,

    /// Maximum pooled connections for file databases.
    pub database_max_connections: u32,

    /// Seed the bootstrap data set on start.
    pub seed_on_start: bool,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            seed_on_start: std::env::var("SEED_ON_START")
                .ok()
                .is_some_and(|s| parse_flag(&s)),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5002".into(),
            database_url: "sqlite://registrar.db".into(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_on_start: false,
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024, // 64KB
            request_timeout_seconds: 30,
        }
    }
}
