//! The precomputed merchant purchase counts.

use rusqlite::Connection;

use crate::Error;

/// The number of merchants shown in the top merchants list.
pub const TOP_MERCHANT_LIMIT: u32 = 10;

/// A merchant and how many purchases were made there.
///
/// The counts are computed outside this application and stored in the
/// "Top Merchants" table.
#[derive(Debug, Clone, PartialEq)]
pub struct TopMerchant {
    pub name: String,
    pub purchase_count: i64,
}

pub fn create_top_merchant_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"Top Merchants\" (
            \"Merchant_Name\" TEXT NOT NULL,
            \"Purchase_Count\" INTEGER NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Get the [TOP_MERCHANT_LIMIT] merchants with the most purchases, most first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_top_merchants(connection: &Connection) -> Result<Vec<TopMerchant>, Error> {
    connection
        .prepare(
            "SELECT \"Merchant_Name\", \"Purchase_Count\"
            FROM \"Top Merchants\"
            ORDER BY \"Purchase_Count\" DESC
            LIMIT ?1",
        )?
        .query_map([TOP_MERCHANT_LIMIT], |row| {
            Ok(TopMerchant {
                name: row.get(0)?,
                purchase_count: row.get(1)?,
            })
        })?
        .map(|merchant_result| merchant_result.map_err(Error::from))
        .collect()
}
