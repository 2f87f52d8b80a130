//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to message mapping
//! - `timers` - Deferred content-clear timers

pub mod app;
pub mod input;
pub mod timers;

pub use app::App;
