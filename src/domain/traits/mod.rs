//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod session;

pub use bot::{Bot, BotInfo};
pub use session::Session;
