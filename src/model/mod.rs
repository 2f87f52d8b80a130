//! Application model - the complete state of the console
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod chain;
pub mod page;
pub mod slide_in;

pub use chain::{ChainEntry, ChainedSlideIns};
pub use page::{Overflow, PageState};
pub use slide_in::{ClearTimer, HostOptions, OpenState, PanelInstance, SlideInHost};

use std::sync::mpsc::Sender;

use crate::config::ConsoleConfig;
use crate::messages::Msg;
use crate::navigation::{Navigation, Route};
use crate::overlay::SlideInGeometry;
use crate::panels::PanelRegistry;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The slide-in host and the panel it shows
    pub host: SlideInHost,
    /// Open slide-ins, topmost last
    pub chain: ChainedSlideIns,
    /// Body element order and scroll lock
    pub page: PageState,
    /// Panel factories
    pub registry: PanelRegistry,
    /// Router and history
    pub nav: Navigation,
    /// Persisted console configuration
    pub config: ConsoleConfig,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Open keyboard-triggered panels in wide mode
    pub wide_next: bool,
}

impl AppModel {
    /// Create a model with the built-in panels, starting at the dashboard.
    ///
    /// `tx` is the channel update messages come back on (close requests,
    /// navigation notifications, timer results).
    pub fn new(config: ConsoleConfig, host_options: HostOptions, tx: Sender<Msg>) -> Self {
        let nav = Navigation::new(Route::Dashboard);
        let host = SlideInHost::new(host_options, &nav, tx, config.close_delay_ms);

        Self {
            host,
            chain: ChainedSlideIns::new(),
            page: PageState::new(),
            registry: PanelRegistry::with_builtin(),
            nav,
            config,
            window_size: (1024, 768),
            wide_next: false,
        }
    }

    pub fn geometry(&self) -> SlideInGeometry {
        SlideInGeometry::from_config(&self.config)
    }

    /// Whether a click at (x, y) hits the backdrop of the open panel
    pub fn is_backdrop_hit(&self, x: f64, y: f64) -> bool {
        if !self.host.is_open() {
            return false;
        }
        let (width, height) = self.window_size;
        self.geometry().is_backdrop_hit(
            x,
            y,
            width as usize,
            height as usize,
            self.host.is_wide(),
        )
    }
}
