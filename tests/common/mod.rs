//! Shared test utilities for integration tests.
//!
//! This module provides a `TestClient` that drives the application in-process
//! against a fresh in-memory expense ledger. Methods are intentionally broad to
//! support various test scenarios across different test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use expense_calculator::config::Config;
use expense_calculator::handlers;
use expense_calculator::server;
use expense_calculator::state::AppState;
use http_body_util::BodyExt;
use std::path::Path;
use tower::ServiceExt;

/// A test client that simulates a browser session, allowing sequential requests
/// against the application.
pub struct TestClient {
    state: AppState,
}

impl TestClient {
    /// Create a new test client with the sample expenses loaded.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new test client with an empty expense list.
    pub fn empty() -> Self {
        Self::with_config(Config {
            seed_samples: false,
            ..Default::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config).expect("Failed to build app state");
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the router for making requests (without middleware for direct handler testing).
    pub fn router(&self) -> Router {
        handlers::routes().with_state(self.state.clone())
    }

    /// Get the full router with middleware applied (mimics production setup).
    pub fn full_router(&self) -> Router {
        server::router(self.state.clone(), Path::new("static"))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        Self::send(
            self.router(),
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await
    }

    /// Make a GET request through the full middleware stack.
    pub async fn get_full(&self, uri: &str) -> (StatusCode, String) {
        Self::send(
            self.full_router(),
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await
    }

    fn form_request(uri: &str, form_data: &[(&str, &str)]) -> Request<Body> {
        let body = form_data
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    /// Make a POST request with form data and return status and body.
    pub async fn post_form(&self, uri: &str, form_data: &[(&str, &str)]) -> (StatusCode, String) {
        Self::send(self.router(), Self::form_request(uri, form_data)).await
    }

    /// Make a form POST through the full middleware stack.
    pub async fn post_form_full(
        &self,
        uri: &str,
        form_data: &[(&str, &str)],
    ) -> (StatusCode, String) {
        Self::send(self.full_router(), Self::form_request(uri, form_data)).await
    }

    /// POST a raw JSON body and return status and body.
    pub async fn post_json(&self, uri: &str, json: &str) -> (StatusCode, String) {
        Self::send(
            self.router(),
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request and return status and body.
    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        Self::send(
            self.router(),
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Get JSON from an endpoint and parse it.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        uri: &str,
    ) -> (StatusCode, Option<T>) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).ok();
        (status, parsed)
    }

    // =========================================================================
    // Helper methods for editing the expense list through the web form
    // =========================================================================

    /// Add an expense via the form and return success status.
    pub async fn add_expense(&self, category: &str, amount: &str) -> bool {
        let (status, _) = self
            .post_form(
                "/expenses/create",
                &[("category", category), ("amount", amount)],
            )
            .await;
        // Redirect (303) indicates success
        status == StatusCode::SEE_OTHER
    }

    /// Delete the expense at `index` via the form and return success status.
    pub async fn delete_expense(&self, index: usize) -> bool {
        let (status, _) = self
            .post_form(&format!("/expenses/{}/delete", index), &[])
            .await;
        status == StatusCode::SEE_OTHER
    }

    pub fn expense_count(&self) -> usize {
        self.state.read_ledger().unwrap().len()
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
