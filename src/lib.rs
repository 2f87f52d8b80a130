//! Slide-in panel host for the storage console
//!
//! This crate provides the core types and logic for the console's slide-in
//! host: one overlay panel at a time, closed on demand or on navigation,
//! with content torn down after the slide-out transition. State changes
//! follow the Elm Architecture pattern (`Msg` → `update` → `Cmd`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod overlay;
pub mod panels;
pub mod slide_in_ref;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ConsoleConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use slide_in_ref::{SlideInId, SlideInRef};
