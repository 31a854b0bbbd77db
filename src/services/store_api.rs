use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductDefect};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the public store catalog endpoint.
#[derive(Debug, Clone)]
pub struct StoreApiClient {
    client: Client,
    products_url: String,
}

/// A product that failed at least one catalog check.
#[derive(Debug, Clone, Serialize)]
pub struct DefectiveProduct {
    pub id: u64,
    pub title: String,
    pub defects: Vec<ProductDefect>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub product_count: usize,
    pub defective: Vec<DefectiveProduct>,
}

impl CatalogReport {
    pub fn is_healthy(&self) -> bool {
        self.defective.is_empty()
    }
}

impl StoreApiClient {
    pub fn new(products_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            products_url: products_url.into(),
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    /// Fetch the full product list. Anything but `200 OK` is an error.
    pub async fn fetch_products(&self) -> AppResult<Vec<Product>> {
        debug!(url = %self.products_url, "Fetching store products");
        let response = self.client.get(&self.products_url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %self.products_url, %status, "Store API returned unexpected status");
            return Err(AppError::Upstream(format!(
                "Store API returned status: {}",
                status
            )));
        }

        let products = response.json::<Vec<Product>>().await?;
        debug!(count = products.len(), "Fetched store products");
        Ok(products)
    }

    pub async fn check(&self) -> AppResult<CatalogReport> {
        let products = self.fetch_products().await?;
        Ok(check_catalog(&products))
    }
}

pub fn check_catalog(products: &[Product]) -> CatalogReport {
    let defective = products
        .iter()
        .filter_map(|product| {
            let defects = product.defects();
            if defects.is_empty() {
                None
            } else {
                Some(DefectiveProduct {
                    id: product.id,
                    title: product.title.clone(),
                    defects,
                })
            }
        })
        .collect();

    CatalogReport {
        product_count: products.len(),
        defective,
    }
}
