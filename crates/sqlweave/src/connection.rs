//! Driver connection strings.
//!
//! [`ConnectionBuilder`] only reads the context's dialect; it shares no
//! state with the statement builders.

use crate::dialect::{Dialect, SqlContext};
use crate::error::ConnectionError;
use crate::log::{self, StatementKind};

/// Driver family a connection string is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DriverType {
    /// `jdbc:` URLs, supported for every non-standard dialect
    #[default]
    Jdbc,
    /// `odbc:` prefix; builds return `ConnectionError::Unsupported`
    Odbc,
}

impl DriverType {
    /// URL prefix, including the trailing `:`.
    pub fn prefix(self) -> &'static str {
        match self {
            DriverType::Jdbc => "jdbc:",
            DriverType::Odbc => "odbc:",
        }
    }
}

/// Default server port for a dialect, if it has a network endpoint.
pub fn default_port(dialect: Dialect) -> Option<u16> {
    match dialect {
        Dialect::Postgres => Some(5432),
        Dialect::MySql | Dialect::MariaDb => Some(3306),
        Dialect::MsSql => Some(1433),
        Dialect::Db2 => Some(50000),
        Dialect::Vertica => Some(5433),
        Dialect::Standard | Dialect::Sqlite => None,
    }
}

/// Connection-string builder.
///
/// ```
/// use sqlweave::{ConnectionBuilder, Dialect, DriverType, SqlContext};
///
/// let url = ConnectionBuilder::new(SqlContext::new(Dialect::Postgres), DriverType::Jdbc)
///     .host("my.server")?
///     .database("mydb")?
///     .build()?;
/// assert_eq!(url, "jdbc:postgresql://my.server:5432/mydb;");
/// # Ok::<(), sqlweave::ConnectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ConnectionBuilder {
    ctx: SqlContext,
    driver: DriverType,
    host: String,
    database: String,
    /// Explicit port; the dialect default applies when unset
    port: Option<u16>,
}

impl ConnectionBuilder {
    /// Start with host `localhost`, no database and the dialect's default port.
    pub fn new(ctx: SqlContext, driver: DriverType) -> Self {
        Self {
            ctx,
            driver,
            host: "localhost".to_string(),
            database: String::new(),
            port: None,
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Result<Self, ConnectionError> {
        let host = host.into();
        if host.is_empty() {
            return Err(ConnectionError::EmptyHost);
        }
        self.host = host;
        Ok(self)
    }

    pub fn database(mut self, database: impl Into<String>) -> Result<Self, ConnectionError> {
        let database = database.into();
        if database.is_empty() {
            return Err(ConnectionError::EmptyDatabase);
        }
        self.database = database;
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Render `<prefix><target>;`.
    pub fn build(&self) -> Result<String, ConnectionError> {
        log::logged(&self.ctx, StatementKind::Connection, self.build_internal())
    }

    fn build_internal(&self) -> Result<String, ConnectionError> {
        if self.driver == DriverType::Odbc {
            return Err(ConnectionError::Unsupported(format!(
                "{} driver",
                self.driver.prefix().trim_end_matches(':')
            )));
        }

        let dialect = self.ctx.dialect();
        let target = match dialect {
            Dialect::Standard => {
                return Err(ConnectionError::Unsupported(format!("{dialect} dialect")));
            }
            Dialect::Sqlite => {
                if self.database.is_empty() {
                    return Err(ConnectionError::MissingDatabase);
                }
                format!("sqlite:{}", self.database)
            }
            Dialect::MsSql => {
                let mut target = format!("sqlserver://{}:{}", self.host, self.port_or_default());
                if !self.database.is_empty() {
                    target.push_str(";databaseName=");
                    target.push_str(&self.database);
                }
                target
            }
            Dialect::Postgres => self.url("postgresql"),
            Dialect::MySql => self.url("mysql"),
            Dialect::MariaDb => self.url("mariadb"),
            Dialect::Db2 => self.url("db2"),
            Dialect::Vertica => self.url("vertica"),
        };

        Ok(format!("{}{target};", self.driver.prefix()))
    }

    /// `scheme://host:port[/database]`
    fn url(&self, scheme: &str) -> String {
        let mut target = format!("{scheme}://{}:{}", self.host, self.port_or_default());
        if !self.database.is_empty() {
            target.push('/');
            target.push_str(&self.database);
        }
        target
    }

    fn port_or_default(&self) -> u16 {
        self.port
            .or_else(|| default_port(self.ctx.dialect()))
            .unwrap_or_default()
    }
}
