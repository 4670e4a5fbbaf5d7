//! Application services - Business logic orchestration

pub mod command_service;
pub mod presence;

pub use command_service::CommandService;
pub use presence::{PresenceState, PresenceUpdater};
