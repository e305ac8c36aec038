//! Launch Status Resolution Integration Tests
//!
//! Drives the resolver through mock verification/launch lookups covering
//! every branch of the two-step decision tree.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use bizmsg_sdk::{
    AgentLaunch, AgentStatus, AgentVerification, BusinessMessagesLaunch, EntryPointLaunch,
    LaunchDetails, LaunchState, VerificationState,
};
use config_console::handlers::resolve_launch_status;
use config_console::infrastructure::{BcApiError, BcApiResult, LaunchLookup, VerificationLookup};

struct MockVerification {
    state: Option<VerificationState>,
    fail: bool,
    calls: AtomicU64,
}

impl MockVerification {
    fn with_state(state: Option<VerificationState>) -> Self {
        Self {
            state,
            fail: false,
            calls: AtomicU64::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            state: None,
            fail: true,
            calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl VerificationLookup for MockVerification {
    async fn get_verification(&self, agent_name: &str) -> BcApiResult<AgentVerification> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BcApiError::Api("verification lookup exploded".to_string()));
        }
        Ok(AgentVerification {
            name: Some(format!("{agent_name}/verification")),
            verification_state: self.state,
        })
    }
}

struct MockLaunch {
    details: Option<LaunchDetails>,
    fail: bool,
    calls: AtomicU64,
}

impl MockLaunch {
    fn with_details(details: Option<LaunchDetails>) -> Self {
        Self {
            details,
            fail: false,
            calls: AtomicU64::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            details: None,
            fail: true,
            calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl LaunchLookup for MockLaunch {
    async fn get_launch(&self, agent_name: &str) -> BcApiResult<AgentLaunch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BcApiError::Api("launch lookup exploded".to_string()));
        }
        Ok(AgentLaunch {
            name: Some(format!("{agent_name}/launch")),
            business_messages: Some(BusinessMessagesLaunch {
                launch_details: self.details.clone(),
            }),
        })
    }
}

fn entry(state: LaunchState) -> Option<EntryPointLaunch> {
    Some(EntryPointLaunch {
        launch_state: Some(state),
    })
}

const AGENT: &str = "brands/1/agents/2";

#[tokio::test]
async fn missing_verification_state_resolves_to_unverified() {
    let verification = MockVerification::with_state(None);
    let launch = MockLaunch::with_details(None);

    let status = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap();

    assert_eq!(
        status,
        AgentStatus::Verification(VerificationState::Unverified)
    );
    assert_eq!(launch.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unverified_agent_skips_the_launch_lookup() {
    let verification = MockVerification::with_state(Some(VerificationState::Pending));
    let launch = MockLaunch::with_details(Some(LaunchDetails {
        non_local: entry(LaunchState::Launched),
        location: None,
    }));

    let status = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap();

    assert_eq!(status, AgentStatus::Verification(VerificationState::Pending));
    assert_eq!(verification.calls.load(Ordering::SeqCst), 1);
    assert_eq!(launch.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_local_launch_state_wins_over_location() {
    let verification = MockVerification::with_state(Some(VerificationState::Verified));
    let launch = MockLaunch::with_details(Some(LaunchDetails {
        non_local: entry(LaunchState::Pending),
        location: entry(LaunchState::Launched),
    }));

    let status = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap();

    assert_eq!(status, AgentStatus::Launch(LaunchState::Pending));
    assert_eq!(launch.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn location_launch_state_used_when_non_local_absent() {
    let verification = MockVerification::with_state(Some(VerificationState::Verified));
    let launch = MockLaunch::with_details(Some(LaunchDetails {
        non_local: None,
        location: entry(LaunchState::Launched),
    }));

    let status = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap();

    assert_eq!(status, AgentStatus::Launch(LaunchState::Launched));
}

#[tokio::test]
async fn verified_agent_without_launch_details_stays_verified() {
    let verification = MockVerification::with_state(Some(VerificationState::Verified));
    let launch = MockLaunch::with_details(None);

    let status = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap();

    assert_eq!(status, AgentStatus::Verification(VerificationState::Verified));
    assert_eq!(launch.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn verification_errors_propagate_unchanged() {
    let verification = MockVerification::failing();
    let launch = MockLaunch::with_details(None);

    let err = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap_err();

    assert!(matches!(err, BcApiError::Api(message) if message.contains("verification")));
    assert_eq!(launch.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn launch_errors_propagate_unchanged() {
    let verification = MockVerification::with_state(Some(VerificationState::Verified));
    let launch = MockLaunch::failing();

    let err = resolve_launch_status(&verification, &launch, AGENT)
        .await
        .unwrap_err();

    assert!(matches!(err, BcApiError::Api(message) if message.contains("launch")));
}
