mod core;
mod delete_endpoint;
mod form;
mod goals_page;

pub use core::{
    GoalId, GoalRow, create_goal, create_goal_table, delete_goal, get_goals_with_accounts,
};
pub use delete_endpoint::delete_goal_endpoint;
pub use form::{GoalForm, GoalFormError, NewGoal, Submitted};
pub use goals_page::{create_goal_endpoint, get_goals_page};
