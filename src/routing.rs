//! Application router configuration.

use axum::{
    Router,
    extract::State,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    account::{get_account_page, get_overview_page},
    endpoints::{self, format_endpoint},
    goal::{create_goal_endpoint, delete_goal_endpoint, get_goals_page},
    not_found::get_404_not_found,
    spending::get_data_page,
    transaction::get_transactions_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ACCOUNT_VIEW, get(get_account_page))
        .route(endpoints::OVERVIEW_VIEW, get(get_overview_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::GOALS_VIEW,
            get(get_goals_page).post(create_goal_endpoint),
        )
        .route(endpoints::DELETE_GOAL, post(delete_goal_endpoint))
        .route(endpoints::DATA_VIEW, get(get_data_page))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the page of the default account.
async fn get_index_page(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format_endpoint(
        endpoints::ACCOUNT_VIEW,
        state.default_account_id,
    ))
}
