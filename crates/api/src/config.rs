use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory that catalog-relative track file paths are resolved against.
    pub media_root: PathBuf,
    /// Seconds between listener gauge samples (default: `5`).
    pub listener_sample_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `3000`                         |
    /// | `DATABASE_URL`         | `sqlite://radio.db?mode=rwc`   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `MEDIA_ROOT`           | `./media`                      |
    /// | `LISTENER_SAMPLE_SECS` | `5`                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://radio.db?mode=rwc".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_root = media_root_from_env();

        let listener_sample_secs: u64 = std::env::var("LISTENER_SAMPLE_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("LISTENER_SAMPLE_SECS must be a valid u64");
        assert!(listener_sample_secs > 0, "LISTENER_SAMPLE_SECS must be positive");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            media_root,
            listener_sample_secs,
        }
    }
}

/// `MEDIA_ROOT`, or a dedicated `./media` directory beside the database.
fn media_root_from_env() -> PathBuf {
    std::env::var("MEDIA_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./media"))
}
