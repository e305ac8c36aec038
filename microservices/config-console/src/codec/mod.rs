//! Form <-> resource codec.
//!
//! HTML forms submit configuration as a flat map of dotted field names.
//! Repeated groups (locales, availability rows, starters) arrive as
//! parallel arrays; a group submitted once arrives as a bare scalar. The
//! decoder normalizes both shapes and rebuilds the nested resources the
//! remote API expects. The encoder produces the scalar/CSV projections an
//! edit form needs. Both directions are pure: no validation, no logging,
//! no remote calls.

pub mod agent;
pub mod display;
pub mod form;
pub mod location;
pub mod non_local;
pub mod representative;
pub mod settings;
pub mod starters;

pub use agent::decode_agent_form;
pub use display::{encode_agent_for_display, AgentDisplay, NonLocalDisplay};
pub use form::{CodecError, CodecResult, FormMap, FormValue};
pub use location::decode_location_form;
