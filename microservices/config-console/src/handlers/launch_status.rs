//! Launch/verification status resolution
//!
//! Two dependent lookups, strictly sequenced: the launch lookup only runs
//! when verification succeeded, because an unverified agent cannot have
//! launch details worth reading.

use bizmsg_sdk::{AgentStatus, VerificationState};

use crate::infrastructure::{BcApiResult, LaunchLookup, VerificationLookup};

/// Resolve the consolidated status for an agent.
///
/// 1. Verification lookup; a response without an explicit state counts as
///    UNVERIFIED, and any state other than VERIFIED is final.
/// 2. Only for verified agents, the launch lookup. The NON_LOCAL entry
///    point's launch state wins over LOCATION's; with no launch details at
///    all the status stays VERIFIED.
///
/// Transport errors from either lookup propagate to the caller unchanged;
/// there are no retries here.
pub async fn resolve_launch_status<V, L>(
    verification: &V,
    launch: &L,
    agent_name: &str,
) -> BcApiResult<AgentStatus>
where
    V: VerificationLookup + ?Sized,
    L: LaunchLookup + ?Sized,
{
    let response = verification.get_verification(agent_name).await?;
    let state = response
        .verification_state
        .unwrap_or(VerificationState::Unverified);
    if state != VerificationState::Verified {
        return Ok(AgentStatus::Verification(state));
    }

    let launch_response = launch.get_launch(agent_name).await?;
    let launch_state = launch_response
        .business_messages
        .and_then(|bm| bm.launch_details)
        .and_then(|details| {
            details
                .non_local
                .and_then(|entry| entry.launch_state)
                .or_else(|| details.location.and_then(|entry| entry.launch_state))
        });

    Ok(match launch_state {
        Some(launch_state) => AgentStatus::Launch(launch_state),
        None => AgentStatus::Verification(state),
    })
}
