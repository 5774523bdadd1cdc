use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use serde::{Deserialize, Serialize};

/// Environment variable holding the dialect name.
pub const ENV_DIALECT: &str = "SQLWEAVE_DIALECT";
/// Environment variable toggling SQL log events (`true`/`false`/`1`/`0`).
pub const ENV_LOG_SQL: &str = "SQLWEAVE_LOG_SQL";
/// Environment variable for the logged SQL length limit (`0` disables truncation).
pub const ENV_MAX_SQL_LENGTH: &str = "SQLWEAVE_MAX_SQL_LENGTH";

/// Configuration for a [`SqlContext`](crate::SqlContext).
///
/// Can be built in code, deserialized from TOML, or read from the environment.
///
/// ```toml
/// dialect = "postgres"
/// log_sql = true
/// max_sql_length = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Target SQL dialect.
    pub dialect: Dialect,
    /// Whether outermost builds emit a `tracing` event.
    pub log_sql: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Standard,
            log_sql: true,
            max_sql_length: Some(200),
        }
    }
}

impl ContextConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Enable or disable SQL log events.
    pub fn log_sql(mut self, enabled: bool) -> Self {
        self.log_sql = enabled;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> SqlResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from `SQLWEAVE_*` environment variables.
    pub fn from_env() -> SqlResult<Self> {
        Self::from_env_map(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set-but-invalid keys are errors.
    pub fn from_env_map<F>(lookup: F) -> SqlResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dialect) = lookup(ENV_DIALECT) {
            config.dialect = dialect.parse()?;
        }

        if let Some(raw) = lookup(ENV_LOG_SQL) {
            config.log_sql = parse_bool(&raw).ok_or_else(|| {
                SqlError::config(format!("{ENV_LOG_SQL} must be a boolean, got '{raw}'"))
            })?;
        }

        if let Some(raw) = lookup(ENV_MAX_SQL_LENGTH) {
            let len: usize = raw.trim().parse().map_err(|_| {
                SqlError::config(format!(
                    "{ENV_MAX_SQL_LENGTH} must be a non-negative integer, got '{raw}'"
                ))
            })?;
            config.max_sql_length = (len > 0).then_some(len);
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
