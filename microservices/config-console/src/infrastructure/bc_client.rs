//! Business Communications API client
//!
//! HTTP client for the remote management API: brand/agent/location CRUD
//! plus the verification and launch status lookups.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use bizmsg_sdk::{Agent, AgentLaunch, AgentVerification, Brand, Location};

use super::{LaunchLookup, VerificationLookup};
use crate::config::ConsoleConfig;

/// Update mask for brand patches
const BRAND_UPDATE_MASK: &str = "displayName";

/// Update mask for agent patches
const AGENT_UPDATE_MASK: &str = "display_name,business_messages_agent";

/// Update mask for location patches
const LOCATION_UPDATE_MASK: &str = "agent,conversationalSettings,defaultLocale";

#[derive(Debug, Error)]
pub enum BcApiError {
    /// Transport failure or malformed response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API rejected the request; carries the first reported
    /// error message, relayed verbatim for display
    #[error("API error: {0}")]
    Api(String),
}

pub type BcApiResult<T> = std::result::Result<T, BcApiError>;

/// Remote management API client. No retries: failures surface to the
/// route layer, which owns the user-facing redirect/message.
pub struct BusinessCommsClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl BusinessCommsClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.bc_api_base_url.clone(),
            access_token: config.bc_access_token.clone(),
        }
    }

    // Brands

    pub async fn list_brands(&self) -> BcApiResult<Vec<Brand>> {
        let response: ListBrandsResponse = self.get_json("v1/brands").await?;
        Ok(response.brands.unwrap_or_default())
    }

    pub async fn get_brand(&self, name: &str) -> BcApiResult<Brand> {
        self.get_json(&format!("v1/{name}")).await
    }

    pub async fn create_brand(&self, brand: &Brand) -> BcApiResult<Brand> {
        self.post_json("v1/brands", brand).await
    }

    pub async fn patch_brand(&self, name: &str, brand: &Brand) -> BcApiResult<Brand> {
        self.patch_json(&format!("v1/{name}"), BRAND_UPDATE_MASK, brand)
            .await
    }

    // Agents

    pub async fn list_agents(&self, brand_name: &str) -> BcApiResult<Vec<Agent>> {
        let response: ListAgentsResponse =
            self.get_json(&format!("v1/{brand_name}/agents")).await?;
        Ok(response.agents.unwrap_or_default())
    }

    pub async fn get_agent(&self, name: &str) -> BcApiResult<Agent> {
        self.get_json(&format!("v1/{name}")).await
    }

    pub async fn create_agent(&self, brand_name: &str, agent: &Agent) -> BcApiResult<Agent> {
        self.post_json(&format!("v1/{brand_name}/agents"), agent)
            .await
    }

    pub async fn patch_agent(&self, name: &str, agent: &Agent) -> BcApiResult<Agent> {
        self.patch_json(&format!("v1/{name}"), AGENT_UPDATE_MASK, agent)
            .await
    }

    // Locations

    pub async fn list_locations(&self, brand_name: &str) -> BcApiResult<Vec<Location>> {
        let response: ListLocationsResponse =
            self.get_json(&format!("v1/{brand_name}/locations")).await?;
        Ok(response.locations.unwrap_or_default())
    }

    pub async fn get_location(&self, name: &str) -> BcApiResult<Location> {
        self.get_json(&format!("v1/{name}")).await
    }

    pub async fn create_location(
        &self,
        brand_name: &str,
        location: &Location,
    ) -> BcApiResult<Location> {
        self.post_json(&format!("v1/{brand_name}/locations"), location)
            .await
    }

    pub async fn patch_location(&self, name: &str, location: &Location) -> BcApiResult<Location> {
        self.patch_json(&format!("v1/{name}"), LOCATION_UPDATE_MASK, location)
            .await
    }

    // Request plumbing

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BcApiResult<T> {
        debug!(path = %path, "GET from management API");

        let mut request = self.client.get(format!("{}/{path}", self.base_url));
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        Self::read_response(request.send().await?).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> BcApiResult<T> {
        debug!(path = %path, "POST to management API");

        let mut request = self.client.post(format!("{}/{path}", self.base_url));
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        Self::read_response(request.json(body).send().await?).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        update_mask: &str,
        body: &B,
    ) -> BcApiResult<T> {
        debug!(path = %path, update_mask = %update_mask, "PATCH to management API");

        let mut request = self
            .client
            .patch(format!("{}/{path}", self.base_url))
            .query(&[("updateMask", update_mask)]);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        Self::read_response(request.json(body).send().await?).await
    }

    async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> BcApiResult<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(BcApiError::Api(first_error_message(&body)))
        }
    }
}

#[async_trait]
impl VerificationLookup for BusinessCommsClient {
    async fn get_verification(&self, agent_name: &str) -> BcApiResult<AgentVerification> {
        self.get_json(&format!("v1/{agent_name}/verification")).await
    }
}

#[async_trait]
impl LaunchLookup for BusinessCommsClient {
    async fn get_launch(&self, agent_name: &str) -> BcApiResult<AgentLaunch> {
        self.get_json(&format!("v1/{agent_name}/launch")).await
    }
}

/// Pull the first reported error message out of an error body, falling
/// back to the raw body when it is not the expected shape.
fn first_error_message(body: &str) -> String {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    if let Some(error) = parsed.and_then(|b| b.error) {
        if let Some(first) = error.errors.into_iter().flatten().next() {
            if !first.message.is_empty() {
                return first.message;
            }
        }
        if !error.message.is_empty() {
            return error.message;
        }
    }
    body.to_string()
}

// Response types

#[derive(Debug, Deserialize)]
struct ListBrandsResponse {
    #[serde(default)]
    brands: Option<Vec<Brand>>,
}

#[derive(Debug, Deserialize)]
struct ListAgentsResponse {
    #[serde(default)]
    agents: Option<Vec<Agent>>,
}

#[derive(Debug, Deserialize)]
struct ListLocationsResponse {
    #[serde(default)]
    locations: Option<Vec<Location>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Option<Vec<ErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    message: String,
}
