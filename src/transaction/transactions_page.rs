//! Displays the transactions of a single account.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{AccountId, UNKNOWN_ACCOUNT_NAME, get_account_name},
    db::Database,
    endpoints::{self, format_endpoint},
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency_text,
    },
    navigation::NavBar,
    spending::UNCATEGORIZED_LABEL,
    transaction::{Transaction, get_transactions_for_account},
};

/// Renders every transaction of the account with `account_id`, newest first.
///
/// Like the account page, an unknown account is shown with a placeholder name
/// and an empty table.
pub async fn get_transactions_page(
    State(database): State<Database>,
    Path(account_id): Path<AccountId>,
) -> Result<Response, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let account_name = get_account_name(account_id, &connection)
        .inspect_err(|error| tracing::error!("could not get account {account_id}: {error}"))?
        .unwrap_or_else(|| UNKNOWN_ACCOUNT_NAME.to_owned());

    let transactions = get_transactions_for_account(account_id, &connection).inspect_err(
        |error| tracing::error!("could not get transactions for account {account_id}: {error}"),
    )?;

    Ok(transactions_view(account_id, &account_name, &transactions).into_response())
}

fn transactions_view(
    account_id: AccountId,
    account_name: &str,
    transactions: &[Transaction],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let account_url = format_endpoint(endpoints::ACCOUNT_VIEW, account_id);
    let title = format!("Transactions - {account_name}");

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { (account_name) }

                    a href=(account_url) class=(LINK_STYLE)
                    {
                        "View spending"
                    }
                }

                div class="relative overflow-x-auto shadow-md rounded"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Vendor" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row(transaction))
                            }

                            @if transactions.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td colspan="4" class="px-6 py-4 text-center" data-empty="true"
                                    {
                                        "No transactions found for this account."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base(&title, &[], &content)
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let category = transaction
        .category
        .as_deref()
        .unwrap_or(UNCATEGORIZED_LABEL);

    html!(
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.vendor.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE) { (category) }
            td class="px-6 py-4 text-right" { (format_currency_text(&transaction.amount)) }
        }
    )
}
