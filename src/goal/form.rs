//! The goal creation form and its validation.

use rusqlite::types::{ToSql, ToSqlOutput};
use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{account::AccountId, amount::Amount};

const DEADLINE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw values submitted by the goal creation form.
///
/// Missing fields are read as empty strings so that they are reported by
/// [NewGoal::try_from] like any other invalid value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalForm {
    /// The name of the goal.
    #[serde(rename = "goal-name")]
    pub name: String,
    /// The ID of the account the goal is saved in.
    #[serde(rename = "account-id")]
    pub account_id: String,
    /// The amount to save.
    #[serde(rename = "target-amount")]
    pub target_amount: String,
    /// The amount saved so far.
    #[serde(rename = "current-amount")]
    pub current_amount: String,
    /// The date the goal should be reached by, e.g. "2026-12-31".
    pub deadline: String,
}

/// The reason a [GoalForm] could not be turned into a [NewGoal].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalFormError {
    /// The name was empty or only whitespace.
    #[error("The goal name cannot be empty.")]
    EmptyName,

    /// The account ID was not an integer.
    #[error("\"{0}\" is not a valid account.")]
    InvalidAccountId(String),

    /// The target amount was not a decimal number.
    #[error("\"{0}\" is not a valid target amount.")]
    InvalidTargetAmount(String),

    /// The current amount was not a decimal number.
    #[error("\"{0}\" is not a valid current amount.")]
    InvalidCurrentAmount(String),

    /// The deadline was not a calendar date in the form YYYY-MM-DD.
    #[error("\"{0}\" is not a valid deadline, use a date like 2026-12-31.")]
    InvalidDeadline(String),
}

/// A parsed form value together with the exact text it was parsed from.
///
/// The text is what gets stored, so "0500" is saved as "0500" and not "500".
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted<T> {
    value: T,
    text: String,
}

impl<T> Submitted<T> {
    /// Parse `text` with `parse` and keep `text` alongside the result.
    pub fn parse<E>(text: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<Self, E> {
        let value = parse(text)?;

        Ok(Self {
            value,
            text: text.to_owned(),
        })
    }

    /// The parsed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The text as it was submitted.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<T> ToSql for Submitted<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.text.as_str()))
    }
}

/// A validated goal that is ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    /// The goal name as submitted. It contains at least one non-whitespace
    /// character.
    pub name: String,
    /// The account the goal belongs to. Its existence is checked on insert.
    pub account_id: AccountId,
    /// The amount to save.
    pub target_amount: Submitted<Amount>,
    /// The amount saved so far.
    pub current_amount: Submitted<Amount>,
    /// The date the goal should be reached by.
    pub deadline: Submitted<Date>,
}

impl TryFrom<GoalForm> for NewGoal {
    type Error = GoalFormError;

    fn try_from(form: GoalForm) -> Result<Self, Self::Error> {
        if form.name.trim().is_empty() {
            return Err(GoalFormError::EmptyName);
        }

        let account_id = form
            .account_id
            .trim()
            .parse()
            .map_err(|_| GoalFormError::InvalidAccountId(form.account_id.clone()))?;

        let target_amount = Submitted::parse(&form.target_amount, str::parse::<Amount>)
            .map_err(|_| GoalFormError::InvalidTargetAmount(form.target_amount.clone()))?;

        let current_amount = Submitted::parse(&form.current_amount, str::parse::<Amount>)
            .map_err(|_| GoalFormError::InvalidCurrentAmount(form.current_amount.clone()))?;

        let deadline = Submitted::parse(&form.deadline, |text| {
            Date::parse(text.trim(), DEADLINE_FORMAT)
        })
        .map_err(|_| GoalFormError::InvalidDeadline(form.deadline.clone()))?;

        Ok(Self {
            name: form.name,
            account_id,
            target_amount,
            current_amount,
            deadline,
        })
    }
}
