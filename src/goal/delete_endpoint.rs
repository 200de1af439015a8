//! Goal deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    Error,
    db::Database,
    endpoints,
    goal::{GoalId, delete_goal},
};

/// Delete the goal with `goal_id` and redirect to the goals page.
///
/// There is no confirmation step and no existence check: deleting a goal that
/// does not exist redirects the same way.
pub async fn delete_goal_endpoint(
    State(database): State<Database>,
    Path(goal_id): Path<GoalId>,
) -> Result<Redirect, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let rows_affected = delete_goal(goal_id, &connection)
        .inspect_err(|error| tracing::error!("could not delete goal {goal_id}: {error}"))?;

    if rows_affected == 0 {
        tracing::debug!("no goal with ID {goal_id} to delete");
    } else {
        tracing::info!("deleted goal {goal_id}");
    }

    Ok(Redirect::to(endpoints::GOALS_VIEW))
}

#[cfg(test)]
mod delete_goal_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        endpoints,
        goal::{delete_goal_endpoint, get_goals_with_accounts},
        test_utils::{TestDatabase, get_header, insert_test_account, insert_test_goal},
    };

    fn goal_ids(test_database: &TestDatabase) -> Vec<i64> {
        get_goals_with_accounts(&test_database.connect())
            .unwrap()
            .into_iter()
            .map(|goal| goal.id)
            .collect()
    }

    #[tokio::test]
    async fn deletes_only_the_requested_goal() {
        let test_database = TestDatabase::new();
        let connection = test_database.connect();
        insert_test_account(&connection, 1, "Opsparing");
        let keep = insert_test_goal(&connection, "Ferie", 1);
        let remove = insert_test_goal(&connection, "Bil", 1);

        let response = delete_goal_endpoint(State(test_database.database.clone()), Path(remove))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), endpoints::GOALS_VIEW);
        assert_eq!(goal_ids(&test_database), vec![keep]);
    }

    #[tokio::test]
    async fn deleting_missing_goal_changes_nothing() {
        let test_database = TestDatabase::new();
        let connection = test_database.connect();
        insert_test_account(&connection, 1, "Opsparing");
        let goal_id = insert_test_goal(&connection, "Ferie", 1);

        let response = delete_goal_endpoint(State(test_database.database.clone()), Path(999))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(goal_ids(&test_database), vec![goal_id]);
    }

    #[tokio::test]
    async fn missing_tables_is_a_server_error() {
        let test_database = TestDatabase::without_tables();

        let response = delete_goal_endpoint(State(test_database.database.clone()), Path(1))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
