//! Progress towards savings goals.

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::savings_goal::SavingsGoal;

/// Goals due within this many days are flagged as due soon.
pub const DUE_SOON_DAYS: i64 = 30;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The percentage of `target` that `current` makes up, capped at 100.
///
/// Returns 0 for a target of zero or less.
pub fn progress_percentage(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }

    (current / target * 100.0).min(100.0)
}

/// The number of days from `now` until the start of `deadline`, rounded up.
///
/// Negative once the deadline has passed. The deadline is taken to be
/// midnight at the same UTC offset as `now`.
pub fn days_remaining(deadline: Date, now: OffsetDateTime) -> i64 {
    let deadline = deadline.midnight().assume_offset(now.offset());
    let seconds = (deadline - now).as_seconds_f64();

    (seconds / SECONDS_PER_DAY).ceil() as i64
}

/// Where a savings goal stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    /// The target amount has been saved.
    Achieved,
    /// The deadline has passed without reaching the target.
    Overdue,
    /// The deadline is at most [DUE_SOON_DAYS] away.
    DueSoon,
    /// More than [DUE_SOON_DAYS] left and the target not yet reached.
    OnTrack,
}

impl GoalStatus {
    /// Classify a goal from its progress and the days left until its deadline.
    pub fn new(percentage: f64, days_remaining: i64) -> Self {
        if percentage >= 100.0 {
            GoalStatus::Achieved
        } else if days_remaining < 0 {
            GoalStatus::Overdue
        } else if days_remaining <= DUE_SOON_DAYS {
            GoalStatus::DueSoon
        } else {
            GoalStatus::OnTrack
        }
    }
}

/// A savings goal together with its progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// The goal being tracked.
    #[serde(flatten)]
    pub goal: SavingsGoal,
    /// The share of the target saved so far, between 0 and 100.
    pub percentage: f64,
    /// Days until the deadline, negative once it has passed.
    pub days_remaining: i64,
    /// The money still to be saved, negative if the target was exceeded.
    pub amount_to_go: f64,
    /// Where the goal stands.
    pub status: GoalStatus,
}

/// Work out the progress of `goal` as of `now`.
pub fn goal_progress(goal: &SavingsGoal, now: OffsetDateTime) -> GoalProgress {
    let percentage = progress_percentage(goal.current_amount, goal.target_amount);
    let days_remaining = days_remaining(goal.deadline, now);

    GoalProgress {
        goal: goal.clone(),
        percentage,
        days_remaining,
        amount_to_go: goal.target_amount - goal.current_amount,
        status: GoalStatus::new(percentage, days_remaining),
    }
}

/// The total saved across `goals` as a percentage of their total target.
///
/// Unlike the progress of a single goal this is not capped, and it is 0 when
/// there is nothing to save towards.
pub fn overall_savings_progress(goals: &[SavingsGoal]) -> f64 {
    let target: f64 = goals.iter().map(|goal| goal.target_amount).sum();
    let current: f64 = goals.iter().map(|goal| goal.current_amount).sum();

    if target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    }
}
