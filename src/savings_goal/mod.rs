//! Savings goals and contributions towards them.

mod contribution_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod overview_endpoint;
mod service;

pub use contribution_endpoint::add_contribution_endpoint;
pub use core::{NewSavingsGoal, SavingsGoal, SavingsGoalPatch};
pub use create_endpoint::{GoalFormState, create_goal_endpoint};
pub use delete_endpoint::delete_goal_endpoint;
pub use edit_endpoint::edit_goal_endpoint;
pub use form::{ContributionForm, DEFAULT_DEADLINE, GoalForm};
pub use list_endpoint::{get_goal_endpoint, list_goals_endpoint};
pub use overview_endpoint::{GoalOverview, get_goal_overview_endpoint, summarize_goals};
pub use service::SavingsGoalService;
