//! Verification and launch status types

use serde::{Deserialize, Serialize};

/// Agent verification state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationState {
    #[serde(rename = "VERIFICATION_STATE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "VERIFICATION_STATE_UNVERIFIED")]
    Unverified,
    #[serde(rename = "VERIFICATION_STATE_PENDING")]
    Pending,
    #[serde(rename = "VERIFICATION_STATE_VERIFIED")]
    Verified,
    #[serde(rename = "VERIFICATION_STATE_SUSPENDED_IN_GMB")]
    SuspendedInGmb,
}

/// Per-entry-point launch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchState {
    #[serde(rename = "LAUNCH_STATE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "LAUNCH_STATE_UNLAUNCHED")]
    Unlaunched,
    #[serde(rename = "LAUNCH_STATE_PENDING")]
    Pending,
    #[serde(rename = "LAUNCH_STATE_LAUNCHED")]
    Launched,
    #[serde(rename = "LAUNCH_STATE_REJECTED")]
    Rejected,
    #[serde(rename = "LAUNCH_STATE_SUSPENDED")]
    Suspended,
    #[serde(rename = "LAUNCH_STATE_PENDING_UNLAUNCH")]
    PendingUnlaunch,
}

/// Verification lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentVerification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absent when verification has never been requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_state: Option<VerificationState>,
}

/// Launch lookup response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentLaunch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_messages: Option<BusinessMessagesLaunch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMessagesLaunch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_details: Option<LaunchDetails>,
}

/// Launch details keyed by entry point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchDetails {
    #[serde(rename = "NON_LOCAL", default, skip_serializing_if = "Option::is_none")]
    pub non_local: Option<EntryPointLaunch>,

    #[serde(rename = "LOCATION", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EntryPointLaunch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPointLaunch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_state: Option<LaunchState>,
}

/// Consolidated status shown on the agent edit page: the verification
/// state until the agent is verified, then the launch state once launch
/// details exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AgentStatus {
    Verification(VerificationState),
    Launch(LaunchState),
}
