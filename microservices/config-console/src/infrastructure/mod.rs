//! Remote management API access

pub mod bc_client;

use async_trait::async_trait;

use bizmsg_sdk::{AgentLaunch, AgentVerification};

pub use bc_client::{BcApiError, BcApiResult, BusinessCommsClient};

/// Verification lookup seam, mockable in tests
#[async_trait]
pub trait VerificationLookup: Send + Sync {
    async fn get_verification(&self, agent_name: &str) -> BcApiResult<AgentVerification>;
}

/// Launch lookup seam, mockable in tests
#[async_trait]
pub trait LaunchLookup: Send + Sync {
    async fn get_launch(&self, agent_name: &str) -> BcApiResult<AgentLaunch>;
}
