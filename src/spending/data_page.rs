//! Displays the top merchants and the highest and lowest spending categories.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::category_totals_table,
    db::Database,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base},
    navigation::NavBar,
    spending::{
        CategoryTotal, TopMerchant, get_highest_spending_categories,
        get_lowest_spending_categories, get_top_merchants,
    },
};

struct DataPageData {
    top_merchants: Vec<TopMerchant>,
    highest_spending: Vec<CategoryTotal>,
    lowest_spending: Vec<CategoryTotal>,
}

/// Renders the top merchants together with the highest and lowest spending
/// categories across all accounts.
pub async fn get_data_page(State(database): State<Database>) -> Result<Response, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let top_merchants = get_top_merchants(&connection)
        .inspect_err(|error| tracing::error!("could not get top merchants: {error}"))?;
    let highest_spending = get_highest_spending_categories(&connection).inspect_err(|error| {
        tracing::error!("could not get highest spending categories: {error}")
    })?;
    let lowest_spending = get_lowest_spending_categories(&connection).inspect_err(|error| {
        tracing::error!("could not get lowest spending categories: {error}")
    })?;

    let data = DataPageData {
        top_merchants,
        highest_spending,
        lowest_spending,
    };

    Ok(data_view(&data).into_response())
}

fn data_view(data: &DataPageData) -> Markup {
    let nav_bar = NavBar::new(endpoints::DATA_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="space-y-8 w-full lg:max-w-5xl"
            {
                section id="top-merchants" class="space-y-2"
                {
                    h2 class="text-lg font-semibold" { "Top merchants" }

                    @if data.top_merchants.is_empty() {
                        p class="text-gray-500 dark:text-gray-400" { "No merchants yet." }
                    } @else {
                        (top_merchants_table(&data.top_merchants))
                    }
                }

                section id="highest-spending" class="space-y-2"
                {
                    h2 class="text-lg font-semibold" { "Highest spending categories" }
                    (ranking_or_empty(&data.highest_spending))
                }

                section id="lowest-spending" class="space-y-2"
                {
                    h2 class="text-lg font-semibold" { "Lowest spending categories" }
                    (ranking_or_empty(&data.lowest_spending))
                }
            }
        }
    );

    base("Data", &[], &content)
}

fn ranking_or_empty(totals: &[CategoryTotal]) -> Markup {
    html!(
        @if totals.is_empty() {
            p class="text-gray-500 dark:text-gray-400" { "No transactions yet." }
        } @else {
            (category_totals_table(totals))
        }
    )
}

fn top_merchants_table(merchants: &[TopMerchant]) -> Markup {
    html!(
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Merchant" }
                    th scope="col" class="px-6 py-3 text-right" { "Purchases" }
                }
            }

            tbody
            {
                @for merchant in merchants {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        th
                            scope="row"
                            class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                        {
                            (merchant.name)
                        }

                        td class="px-6 py-4 text-right" { (merchant.purchase_count) }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod get_data_page_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use scraper::{Html, Selector};

    use crate::{
        amount::Amount,
        html::format_currency,
        spending::get_data_page,
        test_utils::{
            TestDatabase, assert_content_type, assert_valid_html, insert_test_account,
            insert_test_merchant, insert_test_transaction, parse_html_document, text_of,
        },
    };

    /// The (header cell, data cell) text of every body row in the section with `section_id`.
    fn get_section_rows(html: &Html, section_id: &str) -> Vec<(String, String)> {
        let row_selector = Selector::parse(&format!("section#{section_id} tbody tr")).unwrap();
        let header_selector = Selector::parse("th").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        html.select(&row_selector)
            .map(|row| {
                (
                    text_of(row.select(&header_selector).next().unwrap()),
                    text_of(row.select(&cell_selector).next().unwrap()),
                )
            })
            .collect()
    }

    fn row(label: &str, value: &str) -> (String, String) {
        (label.to_owned(), value.to_owned())
    }

    #[tokio::test]
    async fn shows_merchants_and_category_rankings() {
        let test_database = TestDatabase::new();
        let connection = test_database.connect();
        insert_test_account(&connection, 1, "Opsparing");
        insert_test_transaction(&connection, 1, "2024-01-01", "100", Some("A"), "Netto");
        insert_test_transaction(&connection, 1, "2024-01-02", "50", Some("A"), "Netto");
        insert_test_transaction(&connection, 1, "2024-01-03", "30", Some("B"), "DSB");
        insert_test_merchant(&connection, "Netto", 2);
        insert_test_merchant(&connection, "DSB", 7);

        let response = get_data_page(State(test_database.database.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let a_total = format_currency(Amount::from(150));
        let b_total = format_currency(Amount::from(30));
        assert_eq!(
            get_section_rows(&html, "top-merchants"),
            vec![row("DSB", "7"), row("Netto", "2")]
        );
        assert_eq!(
            get_section_rows(&html, "highest-spending"),
            vec![row("A", &a_total), row("B", &b_total)]
        );
        assert_eq!(
            get_section_rows(&html, "lowest-spending"),
            vec![row("B", &b_total), row("A", &a_total)]
        );
    }

    #[tokio::test]
    async fn empty_database_renders_empty_sections() {
        let test_database = TestDatabase::new();

        let response = get_data_page(State(test_database.database.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        for section_id in ["top-merchants", "highest-spending", "lowest-spending"] {
            assert!(get_section_rows(&html, section_id).is_empty());
            let selector = Selector::parse(&format!("section#{section_id} h2")).unwrap();
            assert!(
                html.select(&selector).next().is_some(),
                "want heading in section {section_id}"
            );
        }
    }

    #[tokio::test]
    async fn missing_tables_is_a_server_error() {
        let test_database = TestDatabase::without_tables();

        let response = get_data_page(State(test_database.database.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
