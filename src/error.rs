//! Defines the app level error type and conversions to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{
    goal::GoalFormError, internal_server_error::InternalServerError, not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A row referred to a row in another table that does not exist, e.g. a
    /// goal for an account ID that is not in the database.
    #[error("a foreign key constraint failed")]
    InvalidForeignKey,

    /// The submitted goal form could not be turned into a goal.
    #[error("invalid goal: {0}")]
    InvalidGoal(#[from] GoalFormError),

    /// An unhandled/unexpected SQL error, e.g. a missing table or a database
    /// file that cannot be opened.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 787 => {
                Error::InvalidForeignKey
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;

    use crate::Error;

    #[test]
    fn missing_table_is_sql_error() {
        let connection = Connection::open_in_memory().unwrap();

        let error = connection
            .execute("SELECT * FROM Accounts", [])
            .map_err(Error::from)
            .unwrap_err();

        assert!(matches!(error, Error::SqlError(_)), "got {error:?}");
    }

    #[test]
    fn no_rows_is_not_found() {
        let connection = Connection::open_in_memory().unwrap();

        let error = connection
            .query_row("SELECT 1 WHERE 0", [], |row| row.get::<_, i64>(0))
            .map_err(Error::from)
            .unwrap_err();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn foreign_key_violation_is_mapped() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "PRAGMA foreign_keys = ON;
                CREATE TABLE parent (id INTEGER PRIMARY KEY);
                CREATE TABLE child (parent_id INTEGER REFERENCES parent(id));",
            )
            .unwrap();

        let error = connection
            .execute("INSERT INTO child (parent_id) VALUES (42)", [])
            .map_err(Error::from)
            .unwrap_err();

        assert_eq!(error, Error::InvalidForeignKey);
    }

    #[test]
    fn sql_errors_render_generic_error_page() {
        let error = Error::SqlError(rusqlite::Error::InvalidQuery);

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_renders_404_page() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
