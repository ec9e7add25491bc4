//! Fixtures shared by the unit tests.

#![allow(missing_docs)]

use time::{Date, OffsetDateTime, macros::datetime};

use crate::{
    budget::{Budget, BudgetService},
    category::{Category, CategoryService},
    config::Latency,
    database_id::DatabaseId,
    month::MonthKey,
    savings_goal::{SavingsGoal, SavingsGoalService},
    store::Store,
    transaction::{Transaction, TransactionService, TransactionType},
};

const CREATED_AT: OffsetDateTime = datetime!(2024 - 01 - 01 9:00 UTC);

fn transaction(
    id: DatabaseId,
    amount: f64,
    category: &str,
    kind: TransactionType,
    date: Date,
) -> Transaction {
    Transaction {
        id,
        amount: kind.signed_amount(amount),
        category: category.to_owned(),
        kind,
        description: format!("{category} transaction"),
        date,
        created_at: CREATED_AT,
    }
}

/// An expense of `amount`, stored as a negative amount whatever the sign given.
pub fn expense(id: DatabaseId, amount: f64, category: &str, date: Date) -> Transaction {
    transaction(id, amount, category, TransactionType::Expense, date)
}

pub fn income(id: DatabaseId, amount: f64, category: &str, date: Date) -> Transaction {
    transaction(id, amount, category, TransactionType::Income, date)
}

pub fn transaction_service(transactions: Vec<Transaction>) -> TransactionService {
    TransactionService::new(Store::new(transactions, Latency::none()))
}

pub fn category(id: DatabaseId, name: &str, kind: TransactionType, is_custom: bool) -> Category {
    Category {
        id,
        name: name.to_owned(),
        kind,
        is_custom,
    }
}

pub fn category_service(categories: Vec<Category>) -> CategoryService {
    CategoryService::new(Store::new(categories, Latency::none()))
}

/// The categories named in endpoint tests, all built-in.
pub fn known_categories() -> CategoryService {
    let expenses = ["Food & Dining", "Food", "Shopping", "Housing", "Travel"];
    let incomes = ["Salary", "Freelance"];

    let categories = expenses
        .iter()
        .map(|name| (name, TransactionType::Expense))
        .chain(incomes.iter().map(|name| (name, TransactionType::Income)))
        .zip(1..)
        .map(|((name, kind), id)| category(id, name, kind, false))
        .collect();

    category_service(categories)
}

pub fn budget(id: DatabaseId, category: &str, monthly_limit: f64, month: MonthKey) -> Budget {
    Budget {
        id,
        category: category.to_owned(),
        monthly_limit,
        month,
        year: month.year(),
    }
}

pub fn budget_service(budgets: Vec<Budget>) -> BudgetService {
    BudgetService::new(Store::new(budgets, Latency::none()))
}

pub fn goal(
    id: DatabaseId,
    title: &str,
    target_amount: f64,
    current_amount: f64,
    deadline: Date,
) -> SavingsGoal {
    SavingsGoal {
        id,
        title: title.to_owned(),
        target_amount,
        current_amount,
        deadline,
        created_at: CREATED_AT,
    }
}

pub fn goal_service(goals: Vec<SavingsGoal>) -> SavingsGoalService {
    SavingsGoalService::new(Store::new(goals, Latency::none()))
}
