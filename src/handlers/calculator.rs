use askama::Template;
use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use crate::error::{AppResult, RenderHtml};
use crate::filters::format_amount;
use crate::models::Expense;
use crate::services::aggregator::ExpenseSummary;
use crate::state::AppState;
use crate::VERSION;

#[derive(Template)]
#[template(path = "pages/calculator.html")]
pub struct CalculatorTemplate {
    pub title: String,
    pub version: &'static str,
    pub expenses: Vec<Expense>,
    pub results: Option<ResultsView>,
}

/// Summary figures rendered for display.
pub struct ResultsView {
    pub total: String,
    pub daily_average: String,
    pub top_three: Vec<Expense>,
}

impl From<ExpenseSummary> for ResultsView {
    fn from(summary: ExpenseSummary) -> Self {
        Self {
            total: format_amount(summary.total),
            daily_average: format_amount(summary.daily_average),
            top_three: summary.top_three,
        }
    }
}

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let expenses = state.read_ledger()?.snapshot();
    debug!(expense_count = expenses.len(), "Loading calculator");

    render(expenses, None)
}

pub async fn calculate(State(state): State<AppState>) -> AppResult<Html<String>> {
    let expenses = state.read_ledger()?.snapshot();
    let summary = ExpenseSummary::from_expenses(&expenses);

    debug!(
        expense_count = expenses.len(),
        total = summary.total,
        daily_average = summary.daily_average,
        "Calculated expense summary"
    );

    render(expenses, Some(summary.into()))
}

fn render(expenses: Vec<Expense>, results: Option<ResultsView>) -> AppResult<Html<String>> {
    CalculatorTemplate {
        title: "Expense Calculator".into(),
        version: VERSION,
        expenses,
        results,
    }
    .render_html()
}
