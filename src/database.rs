//! Pattern 2: Abstract Factory (database connectors)
//!
//! Abstract factory: `DatabaseFactory`.
//! Abstract products: `DatabaseConnection`, `DatabaseCommand`.
//! Concrete factories: `MySqlFactory`, `PostgreSqlFactory`, `OracleFactory`.
//!
//! The products only stand in for real driver work: connecting flips a flag
//! and executing describes the query.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::CreationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    MySql,
    PostgreSql,
    Oracle,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::MySql, Backend::PostgreSql, Backend::Oracle];

    /// `--features oracle`, `--features postgres`, otherwise MySQL.
    pub const fn configured() -> Self {
        if cfg!(feature = "oracle") {
            Backend::Oracle
        } else if cfg!(feature = "postgres") {
            Backend::PostgreSql
        } else {
            Backend::MySql
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::MySql => "MySQL",
            Backend::PostgreSql => "PostgreSQL",
            Backend::Oracle => "Oracle",
        };
        f.write_str(name)
    }
}

impl FromStr for Backend {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Backend::MySql),
            "postgres" | "postgresql" => Ok(Backend::PostgreSql),
            "oracle" => Ok(Backend::Oracle),
            _ => Err(CreationError::UnknownBackend(s.to_string())),
        }
    }
}

// =============================================================================
// Abstract products and factory
// =============================================================================

pub trait DatabaseConnection {
    fn backend(&self) -> Backend;
    fn connect(&mut self);
    fn is_connected(&self) -> bool;
}

pub trait DatabaseCommand {
    fn backend(&self) -> Backend;
    fn execute(&self, query: &str) -> String;
}

pub trait DatabaseFactory {
    fn backend(&self) -> Backend;
    fn create_connection(&self) -> Box<dyn DatabaseConnection>;
    fn create_command(&self) -> Box<dyn DatabaseCommand>;
}

// =============================================================================
// MySQL
// =============================================================================

#[derive(Default)]
pub struct MySqlConnection {
    connected: bool,
}

impl DatabaseConnection for MySqlConnection {
    fn backend(&self) -> Backend {
        Backend::MySql
    }

    fn connect(&mut self) {
        debug!("connecting to MySQL");
        self.connected = true;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

pub struct MySqlCommand;

impl DatabaseCommand for MySqlCommand {
    fn backend(&self) -> Backend {
        Backend::MySql
    }

    fn execute(&self, query: &str) -> String {
        debug!(query, "executing MySQL command");
        format!("MySQL executed: {query}")
    }
}

pub struct MySqlFactory;

impl DatabaseFactory for MySqlFactory {
    fn backend(&self) -> Backend {
        Backend::MySql
    }

    fn create_connection(&self) -> Box<dyn DatabaseConnection> {
        Box::new(MySqlConnection::default())
    }

    fn create_command(&self) -> Box<dyn DatabaseCommand> {
        Box::new(MySqlCommand)
    }
}

// =============================================================================
// PostgreSQL
// =============================================================================

#[derive(Default)]
pub struct PostgreSqlConnection {
    connected: bool,
}

impl DatabaseConnection for PostgreSqlConnection {
    fn backend(&self) -> Backend {
        Backend::PostgreSql
    }

    fn connect(&mut self) {
        debug!("connecting to PostgreSQL");
        self.connected = true;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

pub struct PostgreSqlCommand;

impl DatabaseCommand for PostgreSqlCommand {
    fn backend(&self) -> Backend {
        Backend::PostgreSql
    }

    fn execute(&self, query: &str) -> String {
        debug!(query, "executing PostgreSQL command");
        format!("PostgreSQL executed: {query}")
    }
}

pub struct PostgreSqlFactory;

impl DatabaseFactory for PostgreSqlFactory {
    fn backend(&self) -> Backend {
        Backend::PostgreSql
    }

    fn create_connection(&self) -> Box<dyn DatabaseConnection> {
        Box::new(PostgreSqlConnection::default())
    }

    fn create_command(&self) -> Box<dyn DatabaseCommand> {
        Box::new(PostgreSqlCommand)
    }
}

// =============================================================================
// Oracle
// =============================================================================

#[derive(Default)]
pub struct OracleConnection {
    connected: bool,
}

impl DatabaseConnection for OracleConnection {
    fn backend(&self) -> Backend {
        Backend::Oracle
    }

    fn connect(&mut self) {
        debug!("connecting to Oracle");
        self.connected = true;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

pub struct OracleCommand;

impl DatabaseCommand for OracleCommand {
    fn backend(&self) -> Backend {
        Backend::Oracle
    }

    fn execute(&self, query: &str) -> String {
        debug!(query, "executing Oracle command");
        format!("Oracle executed: {query}")
    }
}

pub struct OracleFactory;

impl DatabaseFactory for OracleFactory {
    fn backend(&self) -> Backend {
        Backend::Oracle
    }

    fn create_connection(&self) -> Box<dyn DatabaseConnection> {
        Box::new(OracleConnection::default())
    }

    fn create_command(&self) -> Box<dyn DatabaseCommand> {
        Box::new(OracleCommand)
    }
}

pub fn factory_for(backend: Backend) -> Box<dyn DatabaseFactory> {
    debug!(%backend, "selected database factory");
    match backend {
        Backend::MySql => Box::new(MySqlFactory),
        Backend::PostgreSql => Box::new(PostgreSqlFactory),
        Backend::Oracle => Box::new(OracleFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_factory_builds_one_family() {
        for backend in Backend::ALL {
            let factory = factory_for(backend);
            let connection = factory.create_connection();
            let command = factory.create_command();

            assert_eq!(factory.backend(), backend);
            assert_eq!(connection.backend(), backend);
            assert_eq!(command.backend(), backend);
        }
    }

    #[test]
    fn test_connection_starts_disconnected() {
        let mut connection = PostgreSqlFactory.create_connection();
        assert!(!connection.is_connected());
        connection.connect();
        assert!(connection.is_connected());
    }

    #[test]
    fn test_command_names_backend_and_query() {
        let command = OracleFactory.create_command();
        assert_eq!(
            command.execute("SELECT * FROM some_table"),
            "Oracle executed: SELECT * FROM some_table"
        );
    }

    #[test]
    fn test_configured_backend() {
        let expected = if cfg!(feature = "oracle") {
            Backend::Oracle
        } else if cfg!(feature = "postgres") {
            Backend::PostgreSql
        } else {
            Backend::MySql
        };
        assert_eq!(Backend::configured(), expected);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("postgres".parse::<Backend>().unwrap(), Backend::PostgreSql);
        assert_eq!("MySQL".parse::<Backend>().unwrap(), Backend::MySql);
        assert!(matches!(
            "mariadb".parse::<Backend>(),
            Err(CreationError::UnknownBackend(_))
        ));
    }
}
