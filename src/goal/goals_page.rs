//! Lists savings goals and handles the goal creation form.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::{
    Error,
    account::{Account, get_all_accounts},
    amount::Amount,
    db::Database,
    endpoints::{self, format_endpoint},
    goal::{GoalForm, GoalRow, NewGoal, create_goal, get_goals_with_accounts},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency_text,
    },
    navigation::NavBar,
};

/// Shown when a goal is submitted for an account ID that is not in the database.
const MISSING_ACCOUNT_MESSAGE: &str = "The selected account does not exist.";

/// The goals and the accounts a new goal can be created for.
struct GoalsPageData {
    goals: Vec<GoalRow>,
    accounts: Vec<Account>,
}

impl GoalsPageData {
    fn query(connection: &Connection) -> Result<Self, Error> {
        let goals = get_goals_with_accounts(connection)
            .inspect_err(|error| tracing::error!("could not get goals: {error}"))?;
        let accounts = get_all_accounts(connection)
            .inspect_err(|error| tracing::error!("could not get all accounts: {error}"))?;

        Ok(Self { goals, accounts })
    }
}

/// What to put back into the creation form when the page is rendered.
#[derive(Default)]
struct FormState {
    values: GoalForm,
    error_message: Option<String>,
}

/// Renders the goals page.
pub async fn get_goals_page(State(database): State<Database>) -> Result<Response, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let data = GoalsPageData::query(&connection)?;

    Ok(goals_view(&data, &FormState::default()).into_response())
}

/// Handles the goal creation form.
///
/// A valid goal is inserted and the goals page is rendered with the new goal.
/// Invalid input, including an account that does not exist, writes nothing
/// and renders the goals page with status 422 and the reason.
pub async fn create_goal_endpoint(
    State(database): State<Database>,
    Form(form): Form<GoalForm>,
) -> Result<Response, Error> {
    let connection = database
        .connect()
        .inspect_err(|error| tracing::error!("could not open database connection: {error}"))?;

    let result = NewGoal::try_from(form.clone())
        .map_err(Error::from)
        .and_then(|goal| create_goal(&goal, &connection));

    let (status, form_state) = match result {
        Ok(goal_id) => {
            tracing::info!("created goal {goal_id}");
            (StatusCode::OK, FormState::default())
        }
        Err(Error::InvalidGoal(error)) => {
            tracing::debug!("rejected goal form: {error}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                FormState {
                    values: form,
                    error_message: Some(error.to_string()),
                },
            )
        }
        Err(Error::InvalidForeignKey) => {
            tracing::debug!("rejected goal for missing account {:?}", form.account_id);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                FormState {
                    values: form,
                    error_message: Some(MISSING_ACCOUNT_MESSAGE.to_owned()),
                },
            )
        }
        Err(error) => {
            tracing::error!("could not create goal: {error}");
            return Err(error);
        }
    };

    let data = GoalsPageData::query(&connection)?;

    Ok((status, goals_view(&data, &form_state)).into_response())
}

/// How far `current` is towards `target` in whole percent.
///
/// Returns `None` when either value is not a number or the target is not positive.
fn progress_percent(current: &str, target: &str) -> Option<Decimal> {
    let current: Amount = current.parse().ok()?;
    let target: Amount = target.parse().ok()?;

    if target.value() <= Decimal::ZERO {
        return None;
    }

    current
        .value()
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(target.value())
        .map(|percent| percent.round_dp(0))
}

fn goals_view(data: &GoalsPageData, form_state: &FormState) -> Markup {
    let nav_bar = NavBar::new(endpoints::GOALS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="space-y-8 w-full lg:max-w-5xl"
            {
                section class="space-y-4"
                {
                    h1 class="text-xl font-bold" { "Goals" }
                    (goals_table(&data.goals))
                }

                section class="space-y-4 max-w-md"
                {
                    h2 class="text-lg font-semibold" { "New goal" }
                    (goal_form(&data.accounts, form_state))
                }
            }
        }
    );

    base("Goals", &[], &content)
}

fn goals_table(goals: &[GoalRow]) -> Markup {
    let table_row = |goal: &GoalRow| {
        let delete_url = format_endpoint(endpoints::DELETE_GOAL, goal.id);
        let progress = progress_percent(&goal.current_amount, &goal.target_amount);

        html!(
            tr class=(TABLE_ROW_STYLE) data-goal-id=(goal.id)
            {
                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                {
                    (goal.name)
                }

                td class=(TABLE_CELL_STYLE) { (goal.account_name) }
                td class="px-6 py-4 text-right" { (format_currency_text(&goal.current_amount)) }
                td class="px-6 py-4 text-right" { (format_currency_text(&goal.target_amount)) }
                td class="px-6 py-4 text-right"
                {
                    @if let Some(percent) = progress {
                        (percent) "%"
                    } @else {
                        "-"
                    }
                }
                td class=(TABLE_CELL_STYLE) { (goal.deadline) }
                td class=(TABLE_CELL_STYLE)
                {
                    form method="post" action=(delete_url)
                    {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        )
    };

    html!(
        div class="relative overflow-x-auto shadow-md rounded"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Goal" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Account" }
                        th scope="col" class="px-6 py-3 text-right" { "Saved" }
                        th scope="col" class="px-6 py-3 text-right" { "Target" }
                        th scope="col" class="px-6 py-3 text-right" { "Progress" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Deadline" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for goal in goals {
                        (table_row(goal))
                    }

                    @if goals.is_empty() {
                        tr
                        {
                            td
                                colspan="7"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No goals yet. Create one with the form below."
                            }
                        }
                    }
                }
            }
        }
    )
}

fn goal_form(accounts: &[Account], form_state: &FormState) -> Markup {
    let values = &form_state.values;

    html!(
        form
            id="create-goal"
            method="post"
            action=(endpoints::GOALS_VIEW)
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="goal-name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="goal-name"
                    type="text"
                    name="goal-name"
                    placeholder="New car"
                    value=(values.name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="account-id" class=(FORM_LABEL_STYLE) { "Account" }

                select
                    id="account-id"
                    name="account-id"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select an account" }

                    @for account in accounts {
                        @if account.id.to_string() == values.account_id.trim() {
                            option value=(account.id) selected { (account.name) }
                        } @else {
                            option value=(account.id) { (account.name) }
                        }
                    }
                }
            }

            div
            {
                label for="target-amount" class=(FORM_LABEL_STYLE) { "Target amount" }

                input
                    id="target-amount"
                    type="text"
                    inputmode="decimal"
                    name="target-amount"
                    placeholder="10000.00"
                    value=(values.target_amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="current-amount" class=(FORM_LABEL_STYLE) { "Current amount" }

                input
                    id="current-amount"
                    type="text"
                    inputmode="decimal"
                    name="current-amount"
                    placeholder="0.00"
                    value=(values.current_amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="deadline" class=(FORM_LABEL_STYLE) { "Deadline" }

                input
                    id="deadline"
                    type="date"
                    name="deadline"
                    value=(values.deadline)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(error_message) = &form_state.error_message {
                p class="text-red-600 dark:text-red-400" data-form-error="true"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create goal" }
        }
    )
}
