//! API module

pub mod agents;
pub mod brands;
pub mod locations;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::infrastructure::BusinessCommsClient;

/// Shared state for route handlers
pub struct ConsoleState {
    pub client: BusinessCommsClient,
}

impl ConsoleState {
    pub fn new(client: BusinessCommsClient) -> Self {
        Self { client }
    }
}

/// Generic API response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn error(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            data: None,
            error: Some(message.into()),
        })
    }
}

/// Where the browser should go after a successful save
#[derive(Debug, Serialize)]
pub struct SaveOutcome {
    pub redirect: String,
}

// Health
pub async fn health_check() -> &'static str {
    "OK"
}
pub async fn ready_check() -> &'static str {
    "OK"
}

pub fn create_router(state: Arc<ConsoleState>) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        // Brand management
        .route("/brands", get(brands::list_brands))
        .route("/brands/create", get(brands::create_brand_page))
        .route("/brands/edit", get(brands::edit_brand_page))
        .route("/brands/save", post(brands::save_brand))
        // Agent management
        .route("/agents", get(agents::list_agents))
        .route("/agents/create", get(agents::create_agent_page))
        .route("/agents/edit", get(agents::edit_agent_page))
        .route("/agents/save", post(agents::save_agent))
        // Location management
        .route("/locations", get(locations::list_locations))
        .route("/locations/create", get(locations::create_location_page))
        .route("/locations/edit", get(locations::edit_location_page))
        .route("/locations/save", post(locations::save_location))
        .with_state(state)
}
