//! Location route handlers

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use bizmsg_sdk::{template_settings, Agent, Location, LOCATION_ENTRY_POINT_CHOICES};

use super::{ApiResponse, ConsoleState, SaveOutcome};
use crate::codec::{decode_location_form, FormMap};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandQuery {
    pub brand_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    pub location_id: String,
    pub brand_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuery {
    pub brand_id: String,
    pub location_id: Option<String>,
}

/// Location edit/create form model
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEditPage {
    pub title: &'static str,
    pub form_url: String,
    pub brand_id: String,
    pub is_edit: bool,
    pub location: Location,
    /// Agents of the brand, for the answering-agent picker
    pub agents: Vec<Agent>,
    pub allowed_entry_points: Vec<&'static str>,
    pub message: String,
}

pub async fn list_locations(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<BrandQuery>,
) -> Json<ApiResponse<Vec<Location>>> {
    match state.client.list_locations(&query.brand_id).await {
        Ok(locations) => ApiResponse::success(locations),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}

pub async fn create_location_page(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<BrandQuery>,
) -> Json<ApiResponse<LocationEditPage>> {
    let agents = match state.client.list_agents(&query.brand_id).await {
        Ok(agents) => agents,
        Err(err) => return ApiResponse::error(err.to_string()),
    };

    ApiResponse::success(LocationEditPage {
        title: "Create Location",
        form_url: format!("/locations/save?brandId={}", query.brand_id),
        brand_id: query.brand_id,
        is_edit: false,
        location: Location::form_template(),
        agents,
        allowed_entry_points: LOCATION_ENTRY_POINT_CHOICES.to_vec(),
        message: query.message,
    })
}

pub async fn edit_location_page(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<LocationQuery>,
) -> Json<ApiResponse<LocationEditPage>> {
    let mut location = match state.client.get_location(&query.location_id).await {
        Ok(location) => location,
        Err(err) => return ApiResponse::error(err.to_string()),
    };

    // Older locations may predate conversational settings entirely
    if location.conversational_settings.is_empty() {
        location.conversational_settings = template_settings("en");
    }

    let agents = match state.client.list_agents(&query.brand_id).await {
        Ok(agents) => agents,
        Err(err) => return ApiResponse::error(err.to_string()),
    };

    ApiResponse::success(LocationEditPage {
        title: "Edit Location",
        form_url: format!(
            "/locations/save?locationId={}&brandId={}",
            query.location_id, query.brand_id
        ),
        brand_id: query.brand_id,
        is_edit: true,
        location,
        agents,
        allowed_entry_points: LOCATION_ENTRY_POINT_CHOICES.to_vec(),
        message: query.message,
    })
}

pub async fn save_location(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<SaveQuery>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Json<ApiResponse<SaveOutcome>> {
    let form = FormMap::from_pairs(fields);
    let location = decode_location_form(&form);

    let saved = match &query.location_id {
        Some(location_id) => {
            info!(location = %location_id, "Updating location");
            state.client.patch_location(location_id, &location).await
        }
        None => {
            info!(brand = %query.brand_id, "Creating location");
            state.client.create_location(&query.brand_id, &location).await
        }
    };

    match saved {
        Ok(_) => ApiResponse::success(SaveOutcome {
            redirect: format!("/locations?brandId={}", query.brand_id),
        }),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}
