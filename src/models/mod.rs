pub mod expense;
pub mod product;

pub use expense::{Expense, ExpenseError, NewExpense};
pub use product::{Product, ProductDefect, Rating};
