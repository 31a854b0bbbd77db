use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::NewExpense;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExpenseFormData {
    pub category: String,
    pub amount: String,
}

impl ExpenseFormData {
    fn to_new_expense(&self) -> Result<NewExpense, AppError> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("Invalid amount".into()))?;

        Ok(NewExpense {
            category: self.category.clone(),
            amount,
        })
    }
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ExpenseFormData>,
) -> AppResult<Redirect> {
    debug!(category = %form.category, amount = %form.amount, "Creating expense");

    let new_expense = form.to_new_expense()?;
    let index = state.write_ledger()?.add(new_expense)?;
    info!(expense_index = index, "Expense created via web form");

    Ok(Redirect::to("/"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Redirect> {
    let removed = state.write_ledger()?.remove(index)?;
    info!(expense_index = index, category = %removed.category(), "Expense deleted");

    Ok(Redirect::to("/"))
}
