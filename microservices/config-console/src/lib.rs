//! Configuration Console
//!
//! Browser-facing console for managing business-messaging configuration
//! resources through the remote management API:
//! - Brand, agent, and location CRUD glue
//! - Form <-> resource codec (parallel-array forms to nested resources)
//! - Launch/verification status resolution

pub mod api;
pub mod codec;
pub mod config;
pub mod handlers;
pub mod infrastructure;

pub use config::ConsoleConfig;
