//! Brand route handlers

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use bizmsg_sdk::Brand;

use super::{ApiResponse, ConsoleState, SaveOutcome};
use crate::codec::FormMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandQuery {
    pub brand_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuery {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuery {
    pub brand_id: Option<String>,
}

/// Brand edit/create form model
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandEditPage {
    pub title: &'static str,
    pub form_url: String,
    pub brand: Brand,
    pub message: String,
}

pub async fn list_brands(
    State(state): State<Arc<ConsoleState>>,
) -> Json<ApiResponse<Vec<Brand>>> {
    match state.client.list_brands().await {
        Ok(brands) => ApiResponse::success(brands),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}

pub async fn create_brand_page(
    Query(query): Query<CreateQuery>,
) -> Json<ApiResponse<BrandEditPage>> {
    ApiResponse::success(BrandEditPage {
        title: "Create Brand",
        form_url: "/brands/save".to_string(),
        brand: Brand::new(""),
        message: query.message,
    })
}

pub async fn edit_brand_page(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<BrandQuery>,
) -> Json<ApiResponse<BrandEditPage>> {
    match state.client.get_brand(&query.brand_id).await {
        Ok(brand) => ApiResponse::success(BrandEditPage {
            title: "Edit Brand",
            form_url: format!("/brands/save?brandId={}", query.brand_id),
            brand,
            message: query.message,
        }),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}

pub async fn save_brand(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<SaveQuery>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Json<ApiResponse<SaveOutcome>> {
    let form = FormMap::from_pairs(fields);
    let brand = Brand::new(form.scalar("displayName"));

    let saved = match &query.brand_id {
        Some(brand_id) => {
            info!(brand = %brand_id, "Updating brand");
            state.client.patch_brand(brand_id, &brand).await
        }
        None => {
            info!("Creating brand");
            state.client.create_brand(&brand).await
        }
    };

    match saved {
        Ok(_) => ApiResponse::success(SaveOutcome {
            redirect: "/brands".to_string(),
        }),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}
