use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::format_amount;

/// Errors raised when building or editing expense records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpenseError {
    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    #[error("No expense at position {0}")]
    NotFound(usize),
}

/// A single spending entry.
///
/// The category is never empty and the amount is always finite; both are
/// checked on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExpense")]
pub struct Expense {
    category: String,
    amount: f64,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64) -> Result<Self, ExpenseError> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(ExpenseError::EmptyCategory);
        }
        if !amount.is_finite() {
            return Err(ExpenseError::NonFiniteAmount(amount));
        }
        // -0.0 becomes 0.0 so equal amounts also compare equal under total_cmp.
        let amount = amount + 0.0;
        Ok(Self { category, amount })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn amount_display(&self) -> String {
        format_amount(self.amount)
    }
}

/// Wire shape of an expense before validation.
#[derive(Debug, Deserialize)]
struct RawExpense {
    category: String,
    amount: f64,
}

impl TryFrom<RawExpense> for Expense {
    type Error = ExpenseError;

    fn try_from(raw: RawExpense) -> Result<Self, Self::Error> {
        Expense::new(raw.category, raw.amount)
    }
}

/// An expense as submitted through the add form or the JSON API.
///
/// Stricter than [`Expense`]: the amount has to be positive.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
}

impl NewExpense {
    pub fn into_expense(self) -> Result<Expense, ExpenseError> {
        let expense = Expense::new(self.category, self.amount)?;
        if expense.amount <= 0.0 {
            return Err(ExpenseError::NonPositiveAmount(expense.amount));
        }
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_category() {
        let expense = Expense::new("  Rent ", 40000.0).unwrap();
        assert_eq!(expense.category(), "Rent");
        assert_eq!(expense.amount(), 40000.0);
    }

    #[test]
    fn test_new_rejects_empty_category() {
        assert_eq!(Expense::new("   ", 10.0), Err(ExpenseError::EmptyCategory));
    }

    #[test]
    fn test_new_rejects_non_finite_amount() {
        assert!(matches!(
            Expense::new("Rent", f64::NAN),
            Err(ExpenseError::NonFiniteAmount(_))
        ));
        assert!(matches!(
            Expense::new("Rent", f64::INFINITY),
            Err(ExpenseError::NonFiniteAmount(_))
        ));
    }

    #[test]
    fn test_new_allows_zero_and_negative() {
        assert!(Expense::new("Refund", -500.0).is_ok());
        assert!(Expense::new("Free", 0.0).is_ok());
    }

    #[test]
    fn test_new_normalizes_negative_zero() {
        let expense = Expense::new("Free", -0.0).unwrap();
        assert!(expense.amount().is_sign_positive());

        let parsed: Expense = serde_json::from_str(r#"{"category":"Free","amount":-0.0}"#).unwrap();
        assert!(parsed.amount().is_sign_positive());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Expense = serde_json::from_str(r#"{"category":"Gym","amount":3000}"#).unwrap();
        assert_eq!(ok.category(), "Gym");

        assert!(serde_json::from_str::<Expense>(r#"{"category":"","amount":1}"#).is_err());
        assert!(serde_json::from_str::<Expense>(r#"{"category":"Gym"}"#).is_err());
        assert!(serde_json::from_str::<Expense>(r#"{"category":"Gym","amount":"3000"}"#).is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let expense = Expense::new("Gym", 3000.0).unwrap();
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json, serde_json::json!({"category": "Gym", "amount": 3000.0}));
    }

    #[test]
    fn test_new_expense_requires_positive_amount() {
        let zero = NewExpense {
            category: "Test Category".into(),
            amount: 0.0,
        };
        assert_eq!(zero.into_expense(), Err(ExpenseError::NonPositiveAmount(0.0)));

        let negative = NewExpense {
            category: "Test Category".into(),
            amount: -1.0,
        };
        assert!(negative.into_expense().is_err());

        let valid = NewExpense {
            category: "Test Category".into(),
            amount: 1000.0,
        };
        assert_eq!(valid.into_expense().unwrap().amount(), 1000.0);
    }

    #[test]
    fn test_amount_display() {
        let expense = Expense::new("Groceries", 15000.0).unwrap();
        assert_eq!(expense.amount_display(), "15,000");
    }
}
