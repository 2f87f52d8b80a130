//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod navigation;
mod slide_in;

use std::sync::mpsc::Receiver;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::HostSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use navigation::update_navigation;
pub use slide_in::{close_current, open_slide_in, update_slide_in};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Process every queued message: close requests from `SlideInRef`s,
/// navigation notifications and timer results. Messages enqueued while
/// draining are processed in the same pass.
pub fn drain(model: &mut AppModel, rx: &Receiver<Msg>) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        if let Some(cmd) = update(model, msg) {
            cmds.push(cmd);
        }
    }
    cmds
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::SlideIn(m) => update_slide_in(model, m),
        Msg::Nav(m) => update_navigation(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = HostSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = HostSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "slide_in", %diff, "state changed");
    }
    for violation in after.violations() {
        tracing::error!(target: "slide_in", msg = %msg_name, "invariant violated: {}", violation);
    }

    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::SlideInMsg;

    match msg {
        Msg::SlideIn(m) => match m {
            SlideInMsg::Open { kind, .. } => format!("SlideIn::Open({:?})", kind),
            SlideInMsg::CloseRef(_) => "SlideIn::CloseRef".to_string(),
            SlideInMsg::ClearElapsed { generation } => {
                format!("SlideIn::ClearElapsed({})", generation)
            }
            other => format!("SlideIn::{:?}", other),
        },
        Msg::Nav(m) => format!("Nav::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
