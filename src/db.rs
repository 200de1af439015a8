//! Access to the SQLite database.
//!
//! Connections are not shared between requests: each route handler opens its
//! own connection with [Database::connect], which is closed when it is dropped.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::extract::FromRef;
use rusqlite::{
    Connection, OpenFlags,
    types::{FromSql, FromSqlResult, ValueRef},
};

use crate::{
    AppState, Error, account::create_account_table, goal::create_goal_table,
    spending::create_top_merchant_table, transaction::create_transaction_table,
};

/// The location of the application database.
#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<PathBuf>,
}

impl Database {
    /// Refer to the SQLite database at `path`.
    ///
    /// The file is not opened until [Database::connect] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// The file path of the database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection to an existing database with foreign key
    /// constraints enabled.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the file does not exist or cannot be opened.
    pub fn connect(&self) -> Result<Connection, Error> {
        let connection = Connection::open_with_flags(
            self.path.as_path(),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        connection.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(connection)
    }

    /// Open the database, creating the file if needed, and add any missing tables.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or the schema cannot be applied.
    pub fn create_if_missing(&self) -> Result<(), Error> {
        let connection = Connection::open(self.path.as_path())?;
        initialize(&connection)?;

        Ok(())
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

/// Create the tables for the domain models if they do not exist yet.
///
/// Existing tables and rows are left untouched.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;
    create_account_table(connection)?;
    create_transaction_table(connection)?;
    create_goal_table(connection)?;
    create_top_merchant_table(connection)?;

    Ok(())
}

/// A cell read as text no matter its storage class. NULL becomes an empty string.
///
/// Rows written by other tools are shown as they are stored instead of failing
/// the whole query.
pub(crate) struct CellText(pub String);

impl FromSql for CellText {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = match value {
            ValueRef::Null => String::new(),
            ValueRef::Integer(integer) => integer.to_string(),
            ValueRef::Real(real) => real.to_string(),
            ValueRef::Text(text) | ValueRef::Blob(text) => {
                String::from_utf8_lossy(text).into_owned()
            }
        };

        Ok(Self(text))
    }
}
