/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8787`).
    pub port: u16,
    /// SQLite connection string.
    pub database_url: String,
    /// Pool size for file databases.
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Identity attributed to every caller until authentication exists.
    pub anonymous_user_id: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `8787`                          |
    /// | `DATABASE_URL`         | `sqlite://hapipath.db?mode=rwc` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                             |
    /// | `CORS_ORIGINS`         | `*`                             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `ANONYMOUS_USER_ID`    | `anonymous-user`                |
    /// | `LOG_FORMAT`           | `text` (`json` to switch)       |
    ///
    /// Panics on unparseable numbers so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8787".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://hapipath.db?mode=rwc".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let anonymous_user_id =
            std::env::var("ANONYMOUS_USER_ID").unwrap_or_else(|_| "anonymous-user".into());

        let log_json = std::env::var("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            anonymous_user_id,
            log_json,
        }
    }

    /// Whether the origin list allows any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}
