//! Domain types, configuration and message composition.

pub mod compose;
pub mod config;
pub mod messages;
pub mod models;
