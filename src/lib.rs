//! Kroner is a personal-finance dashboard.
//!
//! It reads accounts, transactions, savings goals and merchant statistics from
//! a SQLite database and serves them as HTML pages: spending by category per
//! account, transaction lists, the goals list with a creation form, and the
//! highest and lowest spending categories.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod amount;
mod app_state;
mod chart;
mod db;
mod endpoints;
mod error;
mod goal;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod spending;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::{Database, initialize};
pub use error::Error;
pub use goal::{GoalForm, NewGoal, Submitted, create_goal};
pub use logging::{add_tracing_layer, setup_logging};
pub use routing::build_router;

/// Wait for a ctrl+c or terminate signal and then shut down the server.
///
/// In-flight requests are given one second to finish.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
