use rusqlite::Connection;
use tempfile::TempDir;

use crate::{AppState, db::Database};

/// A database file in a temporary directory that is deleted on drop.
///
/// Route handlers open their own connections, so tests that call them need a
/// database on disk rather than an in-memory one.
pub(crate) struct TestDatabase {
    // Held so the directory outlives the database.
    _directory: TempDir,
    pub database: Database,
}

impl TestDatabase {
    /// Create a database with all tables.
    pub(crate) fn new() -> Self {
        let test_database = Self::without_tables();
        test_database
            .database
            .create_if_missing()
            .expect("Could not initialise test database");

        test_database
    }

    /// Create an empty database file with no tables.
    pub(crate) fn without_tables() -> Self {
        let directory = TempDir::new().expect("Could not create temporary directory");
        let path = directory.path().join("test.db");
        Connection::open(&path).expect("Could not create test database file");

        Self {
            _directory: directory,
            database: Database::new(path),
        }
    }

    pub(crate) fn connect(&self) -> Connection {
        self.database
            .connect()
            .expect("Could not connect to test database")
    }

    pub(crate) fn app_state(&self) -> AppState {
        AppState {
            database: self.database.clone(),
            default_account_id: 1,
        }
    }
}

#[track_caller]
pub(crate) fn insert_test_account(connection: &Connection, id: i64, name: &str) {
    connection
        .execute(
            "INSERT INTO \"Accounts\" (\"Account_ID\", \"Account_Name\") VALUES (?1, ?2)",
            (id, name),
        )
        .unwrap_or_else(|error| panic!("Could not insert account {id}: {error}"));
}

#[track_caller]
pub(crate) fn insert_test_transaction(
    connection: &Connection,
    account_id: i64,
    date: &str,
    amount: &str,
    category: Option<&str>,
    vendor: &str,
) {
    connection
        .execute(
            "INSERT INTO \"Transactions\"
            (\"Date\", \"Amount (DKK)\", \"Category\", \"Vendor\", \"Account_ID\")
            VALUES (?1, ?2, ?3, ?4, ?5)",
            (date, amount, category, vendor, account_id),
        )
        .unwrap_or_else(|error| panic!("Could not insert transaction: {error}"));
}

#[track_caller]
pub(crate) fn insert_test_merchant(connection: &Connection, name: &str, purchase_count: i64) {
    connection
        .execute(
            "INSERT INTO \"Top Merchants\" (\"Merchant_Name\", \"Purchase_Count\") VALUES (?1, ?2)",
            (name, purchase_count),
        )
        .unwrap_or_else(|error| panic!("Could not insert merchant {name}: {error}"));
}

/// Insert a goal and return its ID.
#[track_caller]
pub(crate) fn insert_test_goal(connection: &Connection, name: &str, account_id: i64) -> i64 {
    connection
        .execute(
            "INSERT INTO \"Goals\"
            (\"Goal_Name\", \"Account_ID\", \"Target_Amount (DKK)\", \"Current_Amount (DKK)\", \"Deadline\")
            VALUES (?1, ?2, '10000', '2500', '2026-12-31')",
            (name, account_id),
        )
        .unwrap_or_else(|error| panic!("Could not insert goal {name}: {error}"));

    connection.last_insert_rowid()
}
