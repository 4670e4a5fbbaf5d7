//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod message;
pub mod payload;
pub mod user;

pub use command::{Command, CommandHandler, CommandRegistry};
pub use message::{Content, Message};
pub use payload::{Card, CardField, Color, Payload};
pub use user::User;
