//! Summary figures derived from a list of expenses.
//!
//! Every function here borrows the caller's slice and leaves it untouched.

use serde::Serialize;

use crate::models::Expense;

/// Length of the period the daily average is spread over.
pub const DAYS_IN_PERIOD: f64 = 30.0;

/// Number of entries reported as the largest expenses.
pub const TOP_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total: f64,
    pub daily_average: f64,
    pub top_three: Vec<Expense>,
}

impl ExpenseSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let total = total(expenses);
        Self {
            total,
            daily_average: daily_average(total),
            top_three: top_three(expenses),
        }
    }
}

pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::amount).sum()
}

pub fn daily_average(total: f64) -> f64 {
    total / DAYS_IN_PERIOD
}

pub fn top_three(expenses: &[Expense]) -> Vec<Expense> {
    top_n(expenses, TOP_COUNT)
}

/// The `n` largest expenses, descending by amount.
///
/// Equal amounts keep their input order (`sort_by` is stable).
pub fn top_n(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount().total_cmp(&a.amount()));
    sorted.truncate(n);
    sorted
}
