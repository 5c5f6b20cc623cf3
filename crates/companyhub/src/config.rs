use std::{env, time::Duration};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "companyhub.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// How long SQLite waits on a locked database, in milliseconds (default: 5000)
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_busy_timeout_ms: u64,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "companyhub.db", ":memory:" allowed)
    /// - `SQLITE_BUSY_TIMEOUT_MS` - SQLite busy timeout (default: 5000)
    /// - `LOG_FORMAT` - "json" for JSON logs, anything else for pretty output
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "companyhub.db".to_string()),
            sqlite_busy_timeout_ms: lookup("SQLITE_BUSY_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5_000),
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the SQLite busy timeout as a Duration.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.sqlite_busy_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_busy_timeout_conversion() {
        let config = Config {
            sqlite_path: "test.db".to_string(),
            sqlite_busy_timeout_ms: 250,
            log_format: LogFormat::Pretty,
        };

        assert_eq!(config.busy_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.sqlite_path, "companyhub.db");
        assert_eq!(config.sqlite_busy_timeout_ms, 5_000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SQLITE_PATH", ":memory:"),
            ("SQLITE_BUSY_TIMEOUT_MS", "100"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(config.sqlite_path, ":memory:");
        assert_eq!(config.sqlite_busy_timeout_ms, 100);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unparsable_timeout_falls_back() {
        let config = config_from(&[("SQLITE_BUSY_TIMEOUT_MS", "soon")]);
        assert_eq!(config.sqlite_busy_timeout_ms, 5_000);
    }
}
