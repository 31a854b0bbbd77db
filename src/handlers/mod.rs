pub mod api;
pub mod calculator;
pub mod expenses;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(calculator::index))
        .route("/calculate", post(calculator::calculate))
        // Expense list
        .route("/expenses/create", post(expenses::create))
        .route("/expenses/:index/delete", post(expenses::delete))
        // API (JSON)
        .route(
            "/api/expenses",
            get(api::list_expenses).post(api::create_expense),
        )
        .route("/api/expenses/:index", delete(api::delete_expense))
        .route("/api/summary", get(api::ledger_summary).post(api::summarize))
        .route("/api/store/check", get(api::store_check))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
