use rusqlite::{Connection, Row};

use crate::{Error, account::AccountId, db::CellText};

/// A single money movement against an account.
///
/// Transactions are imported by other tools and only read here, so every
/// column is read as the text it is stored as.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The date as stored in the database, normally an ISO 8601 date.
    pub date: String,
    /// The signed amount as stored, normally a decimal number that is negative
    /// for money leaving the account.
    pub amount: String,
    pub category: Option<String>,
    pub vendor: Option<String>,
    pub account_id: AccountId,
}

pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"Transactions\" (
            \"Date\" TEXT NOT NULL,
            \"Amount (DKK)\" REAL NOT NULL,
            \"Category\" TEXT,
            \"Vendor\" TEXT,
            \"Account_ID\" INTEGER NOT NULL,
            FOREIGN KEY(\"Account_ID\") REFERENCES \"Accounts\"(\"Account_ID\")
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_transaction(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        date: row.get::<_, CellText>(0)?.0,
        amount: row.get::<_, CellText>(1)?.0,
        category: row.get::<_, Option<CellText>>(2)?.map(|cell| cell.0),
        vendor: row.get::<_, Option<CellText>>(3)?.map(|cell| cell.0),
        account_id: row.get(4)?,
    })
}

/// Get all transactions of the account with `account_id`, newest first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_transactions_for_account(
    account_id: AccountId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT \"Date\", \"Amount (DKK)\", \"Category\", \"Vendor\", \"Account_ID\"
            FROM \"Transactions\"
            WHERE \"Account_ID\" = ?1
            ORDER BY \"Date\" DESC",
        )?
        .query_map([account_id], map_row_to_transaction)?
        .map(|transaction_result| transaction_result.map_err(Error::from))
        .collect()
}
