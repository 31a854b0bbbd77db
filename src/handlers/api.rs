use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::{Expense, NewExpense};
use crate::services::aggregator::ExpenseSummary;
use crate::services::store_api::CatalogReport;
use crate::state::AppState;

pub async fn list_expenses(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    Ok(Json(state.read_ledger()?.snapshot()))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(new_expense): Json<NewExpense>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let mut ledger = state.write_ledger()?;
    let index = ledger.add(new_expense)?;
    let created = ledger.expenses()[index].clone();
    info!(expense_index = index, "Expense created via API");

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<StatusCode> {
    state.write_ledger()?.remove(index)?;
    info!(expense_index = index, "Expense deleted via API");

    Ok(StatusCode::NO_CONTENT)
}

/// Summary of the shared expense list.
pub async fn ledger_summary(State(state): State<AppState>) -> AppResult<Json<ExpenseSummary>> {
    let expenses = state.read_ledger()?.snapshot();
    Ok(Json(ExpenseSummary::from_expenses(&expenses)))
}

/// Summary of the posted records; the shared list is not touched.
pub async fn summarize(Json(expenses): Json<Vec<Expense>>) -> Json<ExpenseSummary> {
    debug!(expense_count = expenses.len(), "Summarizing posted expenses");
    Json(ExpenseSummary::from_expenses(&expenses))
}

pub async fn store_check(State(state): State<AppState>) -> AppResult<Json<CatalogReport>> {
    let report = state.store_api.check().await?;
    info!(
        product_count = report.product_count,
        defective = report.defective.len(),
        "Store catalog checked"
    );

    Ok(Json(report))
}
