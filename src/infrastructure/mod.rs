//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Discord, console)
//! - Liveness: HTTP endpoint for uptime monitors

pub mod adapters;
pub mod config;
pub mod liveness;
