//! Displays the spending by category of a single account.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    Error,
    account::core::{AccountId, UNKNOWN_ACCOUNT_NAME, get_account_name},
    chart::{SpendingChart, charts_head_elements, charts_view},
    db::Database,
    endpoints::{self, format_endpoint},
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    spending::{CategoryTotal, get_category_totals_for_account},
};

/// The category totals of one account, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AccountSpending {
    pub account_id: AccountId,
    pub account_name: String,
    pub totals: Vec<CategoryTotal>,
}

impl AccountSpending {
    /// Query the category totals for the account with `account_id`.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the query fails.
    pub fn query(
        account_id: AccountId,
        account_name: String,
        connection: &Connection,
    ) -> Result<Self, Error> {
        let totals = get_category_totals_for_account(account_id, connection)?;

        Ok(Self {
            account_id,
            account_name,
            totals,
        })
    }

    /// The HTML element ID of the chart container for this account.
    pub fn chart_id(&self) -> String {
        format!("account-{}-chart", self.account_id)
    }

    pub fn chart(&self) -> SpendingChart {
        SpendingChart::new(self.chart_id(), &self.account_name, &self.totals)
    }
}

/// Renders the spending by category for the account with `account_id`.
///
/// An account ID with no account row is shown with a placeholder name and no
/// data rather than as an error.
pub async fn get_account_page(
    State(database): State<Database>,
    Path(account_id): Path<AccountId>,
) -> Result<Response, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let account_name = get_account_name(account_id, &connection)
        .inspect_err(|error| tracing::error!("could not get account {account_id}: {error}"))?
        .unwrap_or_else(|| UNKNOWN_ACCOUNT_NAME.to_owned());

    let spending = AccountSpending::query(account_id, account_name, &connection).inspect_err(
        |error| tracing::error!("could not get category totals for account {account_id}: {error}"),
    )?;

    Ok(account_view(&spending).into_response())
}

fn account_view(spending: &AccountSpending) -> Markup {
    let nav_bar = NavBar::new(endpoints::ACCOUNT_VIEW).into_html();
    let transactions_url = format_endpoint(endpoints::TRANSACTIONS_VIEW, spending.account_id);
    let charts = if spending.totals.is_empty() {
        vec![]
    } else {
        vec![spending.chart()]
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { (spending.account_name) }

                    a href=(transactions_url) class=(LINK_STYLE)
                    {
                        "View transactions"
                    }
                }

                @if spending.totals.is_empty() {
                    p class="text-gray-500 dark:text-gray-400" data-empty="true"
                    {
                        "No transactions found for this account."
                    }
                } @else {
                    (charts_view(&charts))
                    (category_totals_table(&spending.totals))
                }
            }
        }
    );

    base(&spending.account_name, &charts_head_elements(&charts), &content)
}

/// A table with one row per category and its total.
pub(crate) fn category_totals_table(totals: &[CategoryTotal]) -> Markup {
    html!(
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class="px-6 py-3 text-right" { "Total" }
                }
            }

            tbody
            {
                @for total in totals {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        th
                            scope="row"
                            class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                        {
                            (total.category)
                        }

                        td class="px-6 py-4 text-right" { (format_currency(total.total)) }
                    }
                }
            }
        }
    )
}
