//! Slide-in host state machine
//!
//! The host shows at most one panel at a time. Opening replaces whatever is
//! shown synchronously; closing flips the host to `Closed` immediately but
//! keeps the panel content around for `close_delay_ms` so the slide-out
//! transition has something to draw. The deferred clear is identified by a
//! generation number: a new open cancels it, and a timer that fires for a
//! generation that is no longer pending is ignored.
//!
//! ```text
//!            open()                       close()
//!   Closed ─────────▶ Open ──────────────────────▶ Closed (clear pending)
//!     ▲                 │ open(): logged, replaces     │
//!     │                 └──────────────┘               │ ClearElapsed
//!     └────────────────────────────────────────────────┘
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::Sender;
use std::time::Instant;

use anyhow::{bail, Result};

use crate::commands::Cmd;
use crate::messages::{Msg, SlideInMsg};
use crate::navigation::{Navigation, NavigationWatcher};
use crate::panels::{OpenOptions, Panel, PanelContext, PanelKind, PanelRegistry};
use crate::slide_in_ref::{SlideInId, SlideInRef};

use super::page::PageState;

/// Whether the host is showing a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// The panel currently owned by the host
#[derive(Debug)]
pub struct PanelInstance {
    pub id: SlideInId,
    pub kind: PanelKind,
    pub data: Option<serde_json::Value>,
    pub wide: bool,
    pub panel: Box<dyn Panel>,
}

/// Pending removal of panel content after a close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTimer {
    pub generation: u64,
    pub started_at: Instant,
}

/// Construction-time inputs of a host
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
    /// Element id. A host without an id is never attached to the page.
    pub id: Option<String>,
    /// Position in the chained slide-in stack
    pub index: usize,
    /// Panel opened as soon as the host is attached
    pub initial_panel: Option<(PanelKind, OpenOptions)>,
}

impl HostOptions {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

pub struct SlideInHost {
    options: HostOptions,
    state: OpenState,
    wide: bool,
    content: Option<PanelInstance>,
    slide_in_ref: Option<SlideInRef>,
    pending_clear: Option<ClearTimer>,
    next_generation: u64,
    close_delay_ms: u64,
    attached: bool,
    disposed: bool,
    watcher: Option<NavigationWatcher>,
    /// Id of the panel on screen, read by the navigation watcher when an
    /// event fires
    shown: Rc<Cell<Option<SlideInId>>>,
    tx: Sender<Msg>,
}

impl SlideInHost {
    /// Create a host and start watching navigation.
    ///
    /// Close requests from `SlideInRef`s and navigation notifications are
    /// delivered through `tx`. A navigation notice carries the id of the
    /// panel that was open when it happened, so it can only close that one.
    pub fn new(options: HostOptions, nav: &Navigation, tx: Sender<Msg>, close_delay_ms: u64) -> Self {
        let shown: Rc<Cell<Option<SlideInId>>> = Rc::new(Cell::new(None));
        let nav_tx = tx.clone();
        let nav_shown = Rc::clone(&shown);
        let watcher = NavigationWatcher::new(&nav.location, &nav.router, move || {
            let _ = nav_tx.send(Msg::SlideIn(SlideInMsg::Navigated(nav_shown.get())));
        });

        Self {
            options,
            state: OpenState::Closed,
            wide: false,
            content: None,
            slide_in_ref: None,
            pending_clear: None,
            next_generation: 1,
            close_delay_ms,
            attached: false,
            disposed: false,
            watcher: Some(watcher),
            shown,
            tx,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn id(&self) -> Option<&str> {
        self.options.id.as_deref()
    }

    pub fn index(&self) -> usize {
        self.options.index
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OpenState::Open
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_watching_navigation(&self) -> bool {
        self.watcher.is_some()
    }

    /// Panel content, including content lingering during the deferred clear
    pub fn content(&self) -> Option<&PanelInstance> {
        self.content.as_ref()
    }

    pub fn slide_in_ref(&self) -> Option<&SlideInRef> {
        self.slide_in_ref.as_ref()
    }

    /// Id of the most recently opened panel
    pub fn current_id(&self) -> Option<SlideInId> {
        self.slide_in_ref.as_ref().map(SlideInRef::id)
    }

    pub fn pending_clear(&self) -> Option<ClearTimer> {
        self.pending_clear
    }

    pub fn close_delay_ms(&self) -> u64 {
        self.close_delay_ms
    }

    pub fn initial_panel(&self) -> Option<&(PanelKind, OpenOptions)> {
        self.options.initial_panel.as_ref()
    }

    /// Whether backdrop clicks and Escape should do anything
    pub fn accepts_dismiss(&self) -> bool {
        !self.disposed && self.is_open()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Mount the host at the end of the page body so it stacks above
    /// everything else. Returns false if the host has no id, was already
    /// attached, or has been disposed.
    pub fn attach(&mut self, page: &mut PageState) -> bool {
        if self.disposed {
            tracing::warn!("attach() on a disposed slide-in host");
            return false;
        }
        if self.attached {
            return false;
        }
        let Some(id) = self.options.id.as_deref() else {
            tracing::debug!("slide-in host has no id, not attaching");
            return false;
        };

        page.append_to_body(id);
        self.attached = true;
        tracing::debug!("slide-in host {} attached", id);
        true
    }

    /// Unmount: remove the element, force-close the open panel, cancel the
    /// deferred clear and stop watching navigation. Every later request is
    /// ignored.
    pub fn dispose(&mut self, page: &mut PageState) -> Option<Cmd> {
        if self.disposed {
            return None;
        }

        if let Some(id) = self.options.id.as_deref() {
            page.remove_element(id);
        }

        if self.is_open() {
            self.state = OpenState::Closed;
            page.unlock_scroll();
        }
        self.shown.set(None);
        if let Some(slide_in_ref) = self.slide_in_ref.take() {
            slide_in_ref.mark_closed();
        }

        let mut cmds = Vec::new();
        if let Some(timer) = self.pending_clear.take() {
            cmds.push(Cmd::CancelClear {
                generation: timer.generation,
            });
        }

        self.content = None;
        self.watcher = None;
        self.attached = false;
        self.disposed = true;
        tracing::debug!("slide-in host {:?} disposed", self.options.id);

        cmds.push(Cmd::Redraw);
        Some(Cmd::batch(cmds))
    }

    // ------------------------------------------------------------------
    // Open / close
    // ------------------------------------------------------------------

    /// Show a new panel of `kind`, replacing any current content.
    ///
    /// Opening while already open is logged and proceeds. Returns the new
    /// reference and the command to run (cancelling a pending clear timer
    /// when there is one).
    pub fn open(
        &mut self,
        page: &mut PageState,
        registry: &PanelRegistry,
        kind: PanelKind,
        options: OpenOptions,
    ) -> Result<(SlideInRef, Cmd)> {
        if self.disposed {
            bail!("cannot open {:?}: slide-in host has been disposed", kind);
        }
        if !registry.contains(kind) {
            bail!("cannot open {:?}: no panel registered", kind);
        }

        if self.is_open() {
            tracing::error!(
                "SlideIn is already open ({:?}), replacing it with {:?}",
                self.content.as_ref().map(|c| c.kind),
                kind
            );
        }

        self.state = OpenState::Open;
        page.lock_scroll();
        self.wide = options.wide;

        let mut cmds = Vec::new();
        if let Some(timer) = self.pending_clear.take() {
            tracing::debug!("cancelling deferred clear {}", timer.generation);
            cmds.push(Cmd::CancelClear {
                generation: timer.generation,
            });
        }
        self.clear_content();
        if let Some(previous) = self.slide_in_ref.take() {
            previous.mark_closed();
        }

        let slide_in_ref = SlideInRef::new(self.tx.clone());
        let panel = registry.create(
            kind,
            PanelContext {
                data: options.data.clone(),
                slide_in_ref: slide_in_ref.clone(),
            },
        )?;

        self.content = Some(PanelInstance {
            id: slide_in_ref.id(),
            kind,
            data: options.data,
            wide: options.wide,
            panel,
        });
        self.slide_in_ref = Some(slide_in_ref.clone());
        self.shown.set(Some(slide_in_ref.id()));
        tracing::debug!("slide-in opened {:?} ({})", kind, slide_in_ref.id());

        cmds.push(Cmd::Redraw);
        Ok((slide_in_ref, Cmd::batch(cmds)))
    }

    /// Close the open panel. Scroll is unlocked right away; content is
    /// removed when the returned `ScheduleClear` timer fires.
    pub fn close(&mut self, page: &mut PageState) -> Option<Cmd> {
        if !self.is_open() {
            tracing::debug!("close() while closed, ignoring");
            return None;
        }

        self.state = OpenState::Closed;
        self.shown.set(None);
        page.unlock_scroll();
        if let Some(ref slide_in_ref) = self.slide_in_ref {
            slide_in_ref.mark_closed();
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending_clear = Some(ClearTimer {
            generation,
            started_at: Instant::now(),
        });
        tracing::debug!(
            "slide-in closed {:?}, clearing in {}ms (generation {})",
            self.current_id(),
            self.close_delay_ms,
            generation
        );

        Some(Cmd::ScheduleClear {
            generation,
            delay_ms: self.close_delay_ms,
        })
    }

    /// Close on behalf of a `SlideInRef`. Ignored unless `id` is the open panel.
    pub fn close_ref(&mut self, page: &mut PageState, id: SlideInId) -> Option<Cmd> {
        if self.current_id() != Some(id) {
            tracing::debug!("close request from stale slide-in {}, ignoring", id);
            return None;
        }
        self.close(page)
    }

    /// Navigation notice. `shown` is the panel that was open when the
    /// navigation happened; notices from while the host was closed, or for a
    /// panel that has since been replaced, do nothing.
    pub fn is_navigation_target(&self, shown: Option<SlideInId>) -> bool {
        self.is_open() && shown.is_some() && shown == self.current_id()
    }

    /// Deferred clear timer fired
    pub fn clear_elapsed(&mut self, generation: u64) -> Option<Cmd> {
        match self.pending_clear {
            Some(timer) if timer.generation == generation => {
                self.pending_clear = None;
                self.clear_content();
                Some(Cmd::Redraw)
            }
            _ => {
                tracing::debug!("stale clear timer {} ignored", generation);
                None
            }
        }
    }

    /// Forward a confirm action to the open panel
    pub fn confirm(&mut self) {
        if !self.is_open() {
            return;
        }
        if let Some(ref mut content) = self.content {
            content.panel.confirm();
        }
    }

    fn clear_content(&mut self) {
        if let Some(content) = self.content.take() {
            tracing::trace!("panel {:?} ({}) removed", content.kind, content.id);
        }
    }
}

impl fmt::Debug for SlideInHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideInHost")
            .field("id", &self.options.id)
            .field("state", &self.state)
            .field("wide", &self.wide)
            .field("content", &self.content.as_ref().map(|c| c.kind))
            .field("pending_clear", &self.pending_clear.map(|t| t.generation))
            .field("attached", &self.attached)
            .field("disposed", &self.disposed)
            .finish()
    }
}
