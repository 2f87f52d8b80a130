//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=slidein::model::slide_in=debug` - host transitions only
//!
//! Logs are also written to `~/.config/slidein/logs/slidein.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// records at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "slidein.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of slide-in state for diffing across updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSnapshot {
    pub open: bool,
    pub content: Option<String>,
    pub pending_clear: Option<u64>,
    pub scroll_locked: bool,
}

impl HostSnapshot {
    pub fn from_model(model: &crate::model::AppModel) -> Self {
        Self {
            open: model.host.is_open(),
            content: model.host.content().map(|c| format!("{:?}", c.kind)),
            pending_clear: model.host.pending_clear().map(|t| t.generation),
            scroll_locked: model.page.is_scroll_locked(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &HostSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.open != other.open {
            changes.push(format!("open: {} → {}", self.open, other.open));
        }
        if self.content != other.content {
            changes.push(format!("content: {:?} → {:?}", self.content, other.content));
        }
        if self.pending_clear != other.pending_clear {
            changes.push(format!(
                "pending clear: {:?} → {:?}",
                self.pending_clear, other.pending_clear
            ));
        }
        if self.scroll_locked != other.scroll_locked {
            changes.push(format!(
                "scroll locked: {} → {}",
                self.scroll_locked, other.scroll_locked
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Open implies content and a locked page
    pub fn violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();
        if self.open && self.content.is_none() {
            violations.push("open without content");
        }
        if self.open && !self.scroll_locked {
            violations.push("open with scrolling enabled");
        }
        if self.open && self.pending_clear.is_some() {
            violations.push("open with a pending clear");
        }
        violations
    }
}
