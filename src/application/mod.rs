//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Catalog: The fixed reply content
//! - Services: Command registry and presence refresh
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and dispatching

pub mod catalog;
pub mod errors;
pub mod messaging;
pub mod services;
