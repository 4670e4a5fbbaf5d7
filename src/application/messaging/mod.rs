//! Message handling - Event-driven message processing

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{Dispatch, MessageDispatcher};
pub use parser::MessageParser;
