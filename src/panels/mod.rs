//! Panels that can be shown inside a slide-in
//!
//! A panel is created on demand by a `PanelFactory` registered for its
//! `PanelKind`. The factory receives a `PanelContext` carrying the data the
//! opener passed and the `SlideInRef` the panel can use to close itself.
//!
//! ## Available Panels
//!
//! - **SummaryPanel**: display-only key/value view used for every built-in kind

mod summary;

pub use summary::SummaryPanel;

use std::collections::HashMap;
use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::slide_in_ref::SlideInRef;

/// Identifies a slide-in panel type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    /// Clone a snapshot into a new dataset
    SnapshotClone,
    /// Create a cloud sync task
    CloudsyncWizard,
    /// Catalog settings for applications
    CatalogSettings,
    /// Add or edit a dataset
    DatasetForm,
}

impl PanelKind {
    /// Keyboard order (1-4 in the runtime)
    pub const ALL: [PanelKind; 4] = [
        PanelKind::SnapshotClone,
        PanelKind::CloudsyncWizard,
        PanelKind::CatalogSettings,
        PanelKind::DatasetForm,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            PanelKind::SnapshotClone => "Clone to New Dataset",
            PanelKind::CloudsyncWizard => "Cloud Sync Task Wizard",
            PanelKind::CatalogSettings => "Catalog Settings",
            PanelKind::DatasetForm => "Add Dataset",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Options for opening a slide-in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenOptions {
    /// Use the wide panel layout
    pub wide: bool,
    /// Contextual data injected into the panel
    pub data: Option<serde_json::Value>,
}

impl OpenOptions {
    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// What a panel receives when it is created
#[derive(Debug, Clone)]
pub struct PanelContext {
    pub data: Option<serde_json::Value>,
    pub slide_in_ref: SlideInRef,
}

/// A panel displayed inside a slide-in
pub trait Panel: fmt::Debug {
    fn kind(&self) -> PanelKind;

    fn title(&self) -> String;

    /// Label/value rows to display
    fn rows(&self) -> Vec<(String, String)>;

    /// Confirm action (Enter / Save). Panels that finish here close
    /// themselves through their `SlideInRef`.
    fn confirm(&mut self) {}
}

/// Creates panels of one kind
pub trait PanelFactory {
    fn create(&self, ctx: PanelContext) -> Box<dyn Panel>;
}

impl<F> PanelFactory for F
where
    F: Fn(PanelContext) -> Box<dyn Panel>,
{
    fn create(&self, ctx: PanelContext) -> Box<dyn Panel> {
        self(ctx)
    }
}

/// Panel factories keyed by kind
#[derive(Default)]
pub struct PanelRegistry {
    factories: HashMap<PanelKind, Box<dyn PanelFactory>>,
}

impl PanelRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a `SummaryPanel` factory for every built-in kind
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for kind in PanelKind::ALL {
            registry.register(kind, move |ctx: PanelContext| -> Box<dyn Panel> {
                Box::new(SummaryPanel::new(kind, ctx))
            });
        }
        registry
    }

    /// Register (or replace) the factory for `kind`
    pub fn register(&mut self, kind: PanelKind, factory: impl PanelFactory + 'static) {
        if self.factories.insert(kind, Box::new(factory)).is_some() {
            tracing::debug!("Replaced panel factory for {:?}", kind);
        }
    }

    pub fn contains(&self, kind: PanelKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Instantiate a panel of `kind`
    pub fn create(&self, kind: PanelKind, ctx: PanelContext) -> Result<Box<dyn Panel>> {
        let factory = self
            .factories
            .get(&kind)
            .ok_or_else(|| anyhow!("No panel registered for {:?}", kind))?;
        Ok(factory.create(ctx))
    }
}

impl fmt::Debug for PanelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.factories.keys().collect();
        kinds.sort_by_key(|k| PanelKind::ALL.iter().position(|a| a == *k));
        f.debug_struct("PanelRegistry").field("kinds", &kinds).finish()
    }
}
