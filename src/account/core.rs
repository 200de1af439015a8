use rusqlite::{Connection, OptionalExtension};

use crate::Error;

pub type AccountId = i64;

/// The name shown for an account ID that has no row in the accounts table.
pub const UNKNOWN_ACCOUNT_NAME: &str = "Unknown account";

/// A bank account that transactions and goals belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The display name of the account, e.g. "Opsparing".
    pub name: String,
}

pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"Accounts\" (
            \"Account_ID\" INTEGER PRIMARY KEY,
            \"Account_Name\" TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_account(row: &rusqlite::Row) -> Result<Account, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(Account { id, name })
}

/// Get every account in the order the database returns them.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails, e.g. if the table is missing.
pub fn get_all_accounts(connection: &Connection) -> Result<Vec<Account>, Error> {
    connection
        .prepare("SELECT \"Account_ID\", \"Account_Name\" FROM \"Accounts\"")?
        .query_map([], map_row_to_account)?
        .map(|account_result| account_result.map_err(Error::from))
        .collect()
}

/// Get the name of the account with `id`, or `None` if there is no such account.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_account_name(id: AccountId, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .query_row(
            "SELECT \"Account_Name\" FROM \"Accounts\" WHERE \"Account_ID\" = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::from)
}
