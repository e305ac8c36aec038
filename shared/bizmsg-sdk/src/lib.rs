//! Business Messaging management SDK
//!
//! Wire-format resource types for the remote management API: brands,
//! agents, locations, conversational settings, and launch/verification
//! status lookups.

pub mod agent;
pub mod brand;
pub mod conversational;
pub mod entry_point;
pub mod location;
pub mod non_local;
pub mod representative;
pub mod status;


pub use agent::{Agent, BusinessMessagesAgent};
pub use brand::Brand;
pub use conversational::{
    template_settings, ConversationStarter, ConversationalSettings, LocaleSettings, OpenUrlAction,
    StarterError, SuggestedAction, SuggestedReply, Suggestion, MAX_CONVERSATION_STARTERS,
};
pub use entry_point::{
    EntryPointConfig, ENTRY_POINT_LOCATION, ENTRY_POINT_NON_LOCAL, IGNORE_ENTRY_POINT,
    LOCATION_ENTRY_POINT_CHOICES,
};
pub use location::Location;
pub use non_local::{ContactOption, NonLocalConfig, Phone};
pub use representative::{
    template_hours, InteractionType, MessagingAvailability, MessagingHours,
    SupportedAgentInteraction, TimeOfDay,
};
pub use status::{
    AgentLaunch, AgentStatus, AgentVerification, BusinessMessagesLaunch, EntryPointLaunch,
    LaunchDetails, LaunchState, VerificationState,
};
