//! Savings goals and their storage.

use rusqlite::{Connection, Row};

use crate::{Error, db::CellText, goal::NewGoal};

/// Database identifier for a goal.
pub type GoalId = i64;

/// A goal joined with the name of its account, as shown on the goals page.
///
/// The amounts and deadline are kept as the text stored in the database so
/// rows written by other tools are displayed as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub id: GoalId,
    pub name: String,
    pub account_name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: String,
}

pub fn create_goal_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"Goals\" (
            \"Goal_ID\" INTEGER PRIMARY KEY,
            \"Goal_Name\" TEXT NOT NULL,
            \"Account_ID\" INTEGER NOT NULL,
            \"Target_Amount (DKK)\" TEXT NOT NULL,
            \"Current_Amount (DKK)\" TEXT NOT NULL,
            \"Deadline\" TEXT NOT NULL,
            FOREIGN KEY(\"Account_ID\") REFERENCES \"Accounts\"(\"Account_ID\")
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_goal(row: &Row) -> Result<GoalRow, rusqlite::Error> {
    Ok(GoalRow {
        id: row.get(0)?,
        name: row.get::<_, CellText>(1)?.0,
        account_name: row.get::<_, CellText>(2)?.0,
        target_amount: row.get::<_, CellText>(3)?.0,
        current_amount: row.get::<_, CellText>(4)?.0,
        deadline: row.get::<_, CellText>(5)?.0,
    })
}

/// Get every goal whose account exists, together with the account name.
///
/// Goals that refer to a deleted account are left out.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_goals_with_accounts(connection: &Connection) -> Result<Vec<GoalRow>, Error> {
    connection
        .prepare(
            "SELECT g.\"Goal_ID\", g.\"Goal_Name\", a.\"Account_Name\",
                g.\"Target_Amount (DKK)\", g.\"Current_Amount (DKK)\", g.\"Deadline\"
            FROM \"Goals\" g
            INNER JOIN \"Accounts\" a ON a.\"Account_ID\" = g.\"Account_ID\"
            ORDER BY g.\"Goal_ID\"",
        )?
        .query_map([], map_row_to_goal)?
        .map(|goal_result| goal_result.map_err(Error::from))
        .collect()
}

/// Insert `goal` and return its ID.
///
/// # Errors
/// Returns [Error::InvalidForeignKey] if the goal's account does not exist,
/// or [Error::SqlError] for any other SQL error.
pub fn create_goal(goal: &NewGoal, connection: &Connection) -> Result<GoalId, Error> {
    connection.execute(
        "INSERT INTO \"Goals\"
        (\"Goal_Name\", \"Account_ID\", \"Target_Amount (DKK)\", \"Current_Amount (DKK)\", \"Deadline\")
        VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            &goal.name,
            goal.account_id,
            &goal.target_amount,
            &goal.current_amount,
            &goal.deadline,
        ),
    )?;

    Ok(connection.last_insert_rowid())
}

/// Delete the goal with `goal_id` and return the number of deleted rows.
///
/// Deleting a goal that does not exist is not an error, it deletes nothing.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn delete_goal(goal_id: GoalId, connection: &Connection) -> Result<usize, Error> {
    let rows_affected =
        connection.execute("DELETE FROM \"Goals\" WHERE \"Goal_ID\" = ?1", [goal_id])?;

    Ok(rows_affected)
}
