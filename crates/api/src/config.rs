use std::path::PathBuf;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} has an invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database file (default: `projects.db`).
    pub database_path: PathBuf,
    /// Key used to sign flash message cookies.
    pub secret_key: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `127.0.0.1`                     |
    /// | `PORT`                 | `5000`                          |
    /// | `DATABASE_PATH`        | `projects.db`                   |
    /// | `SECRET_KEY`           | random, regenerated every start |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = parse_var("PORT", "5000")?;

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "projects.db".into())
            .into();

        let secret_key = match std::env::var("SECRET_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::warn!(
                    "SECRET_KEY not set; generated a random key, flash cookies will not survive a restart"
                );
                ventureboard_core::signing::generate_secret()
            }
        };

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30")?;

        Ok(Self {
            host,
            port,
            database_path,
            secret_key,
            request_timeout_secs,
        })
    }
}

fn parse_var<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(var).unwrap_or_else(|_| default.into());
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
