//! Transaction amounts summed by category.

use rusqlite::{Connection, Row};

use crate::{Error, account::AccountId, amount::Amount};

/// The label used for transactions without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The number of categories shown in the highest and lowest spending lists.
pub const CATEGORY_RANKING_LIMIT: u32 = 10;

/// The sum of transaction amounts for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
}

fn map_row_to_category_total(row: &Row) -> Result<CategoryTotal, rusqlite::Error> {
    let category: Option<String> = row.get(0)?;
    let total: Option<Amount> = row.get(1)?;

    Ok(CategoryTotal {
        category: category.unwrap_or_else(|| UNCATEGORIZED_LABEL.to_owned()),
        total: total.unwrap_or(Amount::ZERO),
    })
}

/// Sum the transactions of the account with `account_id` by category.
///
/// An account without transactions, including an account that does not exist,
/// produces an empty list.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_category_totals_for_account(
    account_id: AccountId,
    connection: &Connection,
) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT \"Category\", SUM(\"Amount (DKK)\") AS total
            FROM \"Transactions\"
            WHERE \"Account_ID\" = ?1
            GROUP BY \"Category\"",
        )?
        .query_map([account_id], map_row_to_category_total)?
        .map(|total_result| total_result.map_err(Error::from))
        .collect()
}

/// The [CATEGORY_RANKING_LIMIT] categories with the largest totals across all
/// accounts, largest first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_highest_spending_categories(
    connection: &Connection,
) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT \"Category\", SUM(\"Amount (DKK)\") AS total
            FROM \"Transactions\"
            GROUP BY \"Category\"
            ORDER BY total DESC
            LIMIT ?1",
        )?
        .query_map([CATEGORY_RANKING_LIMIT], map_row_to_category_total)?
        .map(|total_result| total_result.map_err(Error::from))
        .collect()
}

/// The [CATEGORY_RANKING_LIMIT] categories with the smallest totals across all
/// accounts, smallest first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_lowest_spending_categories(
    connection: &Connection,
) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT \"Category\", SUM(\"Amount (DKK)\") AS total
            FROM \"Transactions\"
            GROUP BY \"Category\"
            ORDER BY total ASC
            LIMIT ?1",
        )?
        .query_map([CATEGORY_RANKING_LIMIT], map_row_to_category_total)?
        .map(|total_result| total_result.map_err(Error::from))
        .collect()
}
