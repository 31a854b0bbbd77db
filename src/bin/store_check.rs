//! Smoke check of the public store catalog.
//!
//! Fetches the configured products endpoint, logs every product that fails a
//! check and exits non-zero on a failed fetch or when defects were found.

use std::process::ExitCode;

use expense_calculator::config::Config;
use expense_calculator::services::store_api::StoreApiClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expense_calculator=info,store_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let client = match StoreApiClient::new(config.store_api_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(url = %client.products_url(), "Checking store catalog");

    let report = match client.check().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Store catalog check failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for product in &report.defective {
        let reasons: Vec<&str> = product.defects.iter().map(|d| d.description()).collect();
        tracing::warn!(
            id = product.id,
            title = %product.title,
            "Defective product: {}",
            reasons.join(", ")
        );
    }

    tracing::info!(
        product_count = report.product_count,
        defective = report.defective.len(),
        "Store catalog checked"
    );

    if report.is_healthy() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
