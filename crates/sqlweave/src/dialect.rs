//! SQL dialects and the context that binds one to a builder.
//!
//! A [`SqlContext`] is a small `Copy` value. Builders copy it when they are
//! constructed, so a statement always renders in the dialect it was created
//! with. To target another dialect, derive a new context with
//! [`SqlContext::with_dialect`] and build new statements from it.
//!
//! # Example
//! ```
//! use sqlweave::{Dialect, SqlContext};
//!
//! let pg = SqlContext::new(Dialect::Postgres);
//! let mssql = pg.with_dialect(Dialect::MsSql);
//! assert_eq!(pg.dialect(), Dialect::Postgres);
//! assert_eq!(mssql.dialect(), Dialect::MsSql);
//! ```

use crate::config::ContextConfig;
use crate::error::SqlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named SQL flavor.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive names and aliases as `SQLWEAVE_DIALECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dialect {
    /// ANSI SQL
    #[default]
    Standard,
    Postgres,
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "mssql")]
    MsSql,
    Db2,
    #[serde(rename = "mariadb")]
    MariaDb,
    Vertica,
    Sqlite,
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Dialect; 8] = [
        Dialect::Standard,
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::MsSql,
        Dialect::Db2,
        Dialect::MariaDb,
        Dialect::Vertica,
        Dialect::Sqlite,
    ];

    /// Lowercase canonical name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::MsSql => "mssql",
            Dialect::Db2 => "db2",
            Dialect::MariaDb => "mariadb",
            Dialect::Vertica => "vertica",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Postgres and Vertica share `expr::TYPE` cast syntax.
    pub fn is_postgres_family(self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Vertica)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "ansi" => Ok(Dialect::Standard),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "mssql" | "sqlserver" => Ok(Dialect::MsSql),
            "db2" => Ok(Dialect::Db2),
            "mariadb" => Ok(Dialect::MariaDb),
            "vertica" => Ok(Dialect::Vertica),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(SqlError::config(format!("Unknown SQL dialect: '{other}'"))),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = SqlError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Immutable rendering context: the target dialect plus SQL logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlContext {
    dialect: Dialect,
    log_sql: bool,
    max_sql_length: Option<usize>,
}

impl SqlContext {
    /// Create a context for `dialect` with default logging settings.
    pub fn new(dialect: Dialect) -> Self {
        Self::from_config(&ContextConfig::new().dialect(dialect))
    }

    /// Create a context from a loaded [`ContextConfig`].
    pub fn from_config(config: &ContextConfig) -> Self {
        Self {
            dialect: config.dialect,
            log_sql: config.log_sql,
            max_sql_length: config.max_sql_length,
        }
    }

    /// Return a copy of this context targeting another dialect.
    pub fn with_dialect(self, dialect: Dialect) -> Self {
        Self { dialect, ..self }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Whether outermost builds emit a `tracing` event.
    pub fn log_sql(&self) -> bool {
        self.log_sql
    }

    /// Maximum SQL length (bytes) included in log events. `None` means no truncation.
    pub fn max_sql_length(&self) -> Option<usize> {
        self.max_sql_length
    }
}

impl Default for SqlContext {
    fn default() -> Self {
        Self::new(Dialect::Standard)
    }
}

impl From<Dialect> for SqlContext {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("POSTGRESQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" sqlserver ".parse::<Dialect>().unwrap(), Dialect::MsSql);
        assert_eq!("mariadb".parse::<Dialect>().unwrap(), Dialect::MariaDb);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, SqlError::Config(_)));
    }

    #[test]
    fn display_matches_parse() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn deserialize_accepts_aliases() {
        let dialects: Vec<Dialect> =
            serde_json::from_str(r#"["PostgreSQL", "sqlserver", "MySQL", "ansi"]"#).unwrap();
        assert_eq!(
            dialects,
            [Dialect::Postgres, Dialect::MsSql, Dialect::MySql, Dialect::Standard]
        );
        assert!(serde_json::from_str::<Dialect>(r#""oracle""#).is_err());
    }

    #[test]
    fn serialize_uses_canonical_names() {
        for dialect in Dialect::ALL {
            let json = serde_json::to_string(&dialect).unwrap();
            assert_eq!(json, format!("\"{}\"", dialect.as_str()));
        }
    }

    #[test]
    fn postgres_family() {
        assert!(Dialect::Postgres.is_postgres_family());
        assert!(Dialect::Vertica.is_postgres_family());
        assert!(!Dialect::MsSql.is_postgres_family());
        assert!(!Dialect::Standard.is_postgres_family());
    }

    #[test]
    fn with_dialect_leaves_original_untouched() {
        let ctx = SqlContext::new(Dialect::Postgres);
        let other = ctx.with_dialect(Dialect::Sqlite);
        assert_eq!(ctx.dialect(), Dialect::Postgres);
        assert_eq!(other.dialect(), Dialect::Sqlite);
        assert_eq!(other.log_sql(), ctx.log_sql());
    }
}
