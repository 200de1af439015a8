//! Displays the spending by category of every account.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{account_page::AccountSpending, core::get_all_accounts},
    chart::{SpendingChart, charts_head_elements},
    db::Database,
    endpoints::{self, format_endpoint},
    html::{PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
};

/// Renders one spending chart per account.
///
/// The category totals are queried separately for each account.
pub async fn get_overview_page(State(database): State<Database>) -> Result<Response, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let accounts = get_all_accounts(&connection)
        .inspect_err(|error| tracing::error!("could not get all accounts: {error}"))?;

    let spending = accounts
        .into_iter()
        .map(|account| AccountSpending::query(account.id, account.name, &connection))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|error| tracing::error!("could not get category totals: {error}"))?;

    Ok(overview_view(&spending).into_response())
}

fn overview_view(spending: &[AccountSpending]) -> Markup {
    let nav_bar = NavBar::new(endpoints::OVERVIEW_VIEW).into_html();
    let charts: Vec<SpendingChart> = spending
        .iter()
        .filter(|account| !account.totals.is_empty())
        .map(AccountSpending::chart)
        .collect();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                h1 class="text-xl font-bold" { "Overview" }

                @if spending.is_empty() {
                    p class="text-gray-500 dark:text-gray-400" { "No accounts found." }
                }

                @for account in spending {
                    article class="space-y-2" data-account-id=(account.account_id)
                    {
                        h2 class="text-lg font-semibold"
                        {
                            (link(
                                &format_endpoint(endpoints::ACCOUNT_VIEW, account.account_id),
                                &account.account_name,
                            ))
                        }

                        @if account.totals.is_empty() {
                            p class="text-gray-500 dark:text-gray-400"
                            {
                                "No transactions found for this account."
                            }
                        } @else {
                            div
                                id=(account.chart_id())
                                class="min-h-[380px] rounded dark:bg-gray-100"
                            {}
                        }
                    }
                }
            }
        }
    );

    base("Overview", &charts_head_elements(&charts), &content)
}
