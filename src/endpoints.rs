//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/account/{account_id}', use [format_endpoint].

/// The root route which redirects to the default account.
pub const ROOT: &str = "/";
/// The spending by category for a single account.
pub const ACCOUNT_VIEW: &str = "/account/{account_id}";
/// The spending by category for every account.
pub const OVERVIEW_VIEW: &str = "/index";
/// The transactions of a single account, newest first.
pub const TRANSACTIONS_VIEW: &str = "/transactions/{account_id}";
/// The page listing savings goals. Goals are created by posting to this route.
pub const GOALS_VIEW: &str = "/goals";
/// The route for deleting a goal.
pub const DELETE_GOAL: &str = "/delete_goal/{goal_id}";
/// The top merchants and the highest and lowest spending categories.
pub const DATA_VIEW: &str = "/data";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/account/{account_id}', '{account_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::ACCOUNT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::OVERVIEW_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::GOALS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DELETE_GOAL);
        assert_endpoint_is_valid_uri(endpoints::DATA_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn formats_app_routes() {
        assert_eq!(format_endpoint(endpoints::ACCOUNT_VIEW, 3), "/account/3");
        assert_eq!(
            format_endpoint(endpoints::TRANSACTIONS_VIEW, 3),
            "/transactions/3"
        );
        assert_eq!(format_endpoint(endpoints::DELETE_GOAL, 7), "/delete_goal/7");
    }
}
