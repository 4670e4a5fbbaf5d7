//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Payload, Message, Command)
//! - Traits: Abstractions for infrastructure (Bot, Session)

pub mod entities;
pub mod traits;
