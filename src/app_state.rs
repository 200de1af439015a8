//! Implements a struct that holds the state of the server.

use crate::{Error, account::AccountId, db::Database};

/// The state of the server.
///
/// It only holds configuration. Route handlers open their own database
/// connections, so there is no shared mutable state between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The application database.
    pub database: Database,

    /// The account that the root route redirects to.
    pub default_account_id: AccountId,
}

impl AppState {
    /// Create a new [AppState] for the SQLite database at `database`.
    ///
    /// This function will create the database file if needed and add the
    /// tables for the domain models that do not exist yet.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(database: Database, default_account_id: AccountId) -> Result<Self, Error> {
        database.create_if_missing()?;

        Ok(Self {
            database,
            default_account_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::{AppState, db::Database};

    #[test]
    fn new_creates_database_with_tables() {
        let directory = TempDir::new().unwrap();
        let database = Database::new(directory.path().join("new.db"));

        let state = AppState::new(database, 3).unwrap();

        assert_eq!(state.default_account_id, 3);
        let connection = state.database.connect().unwrap();
        let table_count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                AND name IN ('Accounts', 'Transactions', 'Goals', 'Top Merchants')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 4);
    }
}
