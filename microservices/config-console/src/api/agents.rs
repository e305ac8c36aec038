//! Agent route handlers

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use bizmsg_sdk::{template_hours, Agent, AgentStatus, MessagingHours};

use super::{ApiResponse, ConsoleState, SaveOutcome};
use crate::codec::{decode_agent_form, encode_agent_for_display, AgentDisplay, FormMap};
use crate::handlers::resolve_launch_status;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandQuery {
    pub brand_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentQuery {
    pub agent_id: String,
    pub brand_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuery {
    pub brand_id: String,
    pub agent_id: Option<String>,
}

/// Agent edit/create form model
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentEditPage {
    pub title: &'static str,
    pub form_url: String,
    pub brand_id: String,
    pub is_edit: bool,
    pub agent: AgentDisplay,
    /// Resolved launch/verification status; only on edit pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
    pub template_hours: Vec<MessagingHours>,
    pub timezones: Vec<String>,
    pub message: String,
}

pub async fn list_agents(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<BrandQuery>,
) -> Json<ApiResponse<Vec<Agent>>> {
    match state.client.list_agents(&query.brand_id).await {
        Ok(agents) => ApiResponse::success(agents),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}

pub async fn create_agent_page(
    Query(query): Query<BrandQuery>,
) -> Json<ApiResponse<AgentEditPage>> {
    ApiResponse::success(AgentEditPage {
        title: "Create Agent",
        form_url: format!("/agents/save?brandId={}", query.brand_id),
        brand_id: query.brand_id,
        is_edit: false,
        agent: encode_agent_for_display(&Agent::form_template()),
        status: None,
        template_hours: template_hours(),
        timezones: timezone_names(),
        message: query.message,
    })
}

pub async fn edit_agent_page(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<AgentQuery>,
) -> Json<ApiResponse<AgentEditPage>> {
    let agent = match state.client.get_agent(&query.agent_id).await {
        Ok(agent) => agent,
        Err(err) => return ApiResponse::error(err.to_string()),
    };

    let status =
        match resolve_launch_status(&state.client, &state.client, &query.agent_id).await {
            Ok(status) => status,
            Err(err) => return ApiResponse::error(err.to_string()),
        };

    ApiResponse::success(AgentEditPage {
        title: "Edit Agent",
        form_url: format!(
            "/agents/save?agentId={}&brandId={}",
            query.agent_id, query.brand_id
        ),
        brand_id: query.brand_id,
        is_edit: true,
        agent: encode_agent_for_display(&agent),
        status: Some(status),
        template_hours: template_hours(),
        timezones: timezone_names(),
        message: query.message,
    })
}

pub async fn save_agent(
    State(state): State<Arc<ConsoleState>>,
    Query(query): Query<SaveQuery>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Json<ApiResponse<SaveOutcome>> {
    let form = FormMap::from_pairs(fields);
    let agent = decode_agent_form(&form);

    let saved = match &query.agent_id {
        Some(agent_id) => {
            info!(agent = %agent_id, "Updating agent");
            state.client.patch_agent(agent_id, &agent).await
        }
        None => {
            info!(brand = %query.brand_id, "Creating agent");
            state.client.create_agent(&query.brand_id, &agent).await
        }
    };

    match saved {
        Ok(_) => ApiResponse::success(SaveOutcome {
            redirect: format!("/agents?brandId={}", query.brand_id),
        }),
        Err(err) => ApiResponse::error(err.to_string()),
    }
}

/// Timezone names offered by availability-window forms
fn timezone_names() -> Vec<String> {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name().to_string())
        .collect()
}
