//! OlympusBot - Discord command bot for the OlympusLand Minecraft server
//!
//! Replies to `+`-prefixed commands with fixed server info and rule cards,
//! keeps a "In N servers" status fresh, and exposes a liveness endpoint.

pub mod application;
pub mod domain;
pub mod infrastructure;
