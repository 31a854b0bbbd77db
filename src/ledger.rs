//! The in-memory expense list edited through the UI.
//!
//! Nothing here is persisted: the list starts either empty or with the sample
//! entries and lives as long as the process.

use crate::models::{Expense, ExpenseError, NewExpense};
use crate::services::aggregator::ExpenseSummary;

const SAMPLE_EXPENSES: &[(&str, f64)] = &[
    ("Groceries", 15000.0),
    ("Rent", 40000.0),
    ("Transportation", 5000.0),
    ("Entertainment", 10000.0),
    ("Communication", 2000.0),
    ("Gym", 3000.0),
];

#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples() -> Self {
        let expenses = SAMPLE_EXPENSES
            .iter()
            .filter_map(|(category, amount)| Expense::new(*category, *amount).ok())
            .collect();
        Self { expenses }
    }

    /// Append a submitted expense and return its position.
    pub fn add(&mut self, new_expense: NewExpense) -> Result<usize, ExpenseError> {
        let expense = new_expense.into_expense()?;
        self.expenses.push(expense);
        Ok(self.expenses.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<Expense, ExpenseError> {
        if index >= self.expenses.len() {
            return Err(ExpenseError::NotFound(index));
        }
        Ok(self.expenses.remove(index))
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn summary(&self) -> ExpenseSummary {
        ExpenseSummary::from_expenses(&self.expenses)
    }
}
