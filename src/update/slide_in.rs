//! Slide-in message handlers
//!
//! Every close path (reference, backdrop, Escape, navigation) ends in
//! `SlideInHost::close`, and the chained stack is kept in step with the host.

use anyhow::Result;

use crate::commands::Cmd;
use crate::messages::SlideInMsg;
use crate::model::{AppModel, ChainEntry};
use crate::panels::{OpenOptions, PanelKind};
use crate::slide_in_ref::SlideInRef;

/// Handle slide-in messages
pub fn update_slide_in(model: &mut AppModel, msg: SlideInMsg) -> Option<Cmd> {
    match msg {
        SlideInMsg::Open { kind, options } => match open_slide_in(model, kind, options) {
            Ok((_, cmd)) => Some(cmd),
            Err(e) => {
                tracing::error!("Failed to open slide-in: {:#}", e);
                None
            }
        },

        SlideInMsg::CloseRef(id) => {
            if model.host.current_id() != Some(id) {
                tracing::debug!("close request from stale slide-in {}, ignoring", id);
                return None;
            }
            close_current(model)
        }

        SlideInMsg::BackdropClicked | SlideInMsg::Escape => close_topmost(model),

        SlideInMsg::Navigated(shown) => {
            if !model.host.is_navigation_target(shown) {
                tracing::debug!("navigation notice for {:?} no longer applies", shown);
                return None;
            }
            close_current(model)
        }

        SlideInMsg::ClearElapsed { generation } => model.host.clear_elapsed(generation),

        SlideInMsg::ConfirmPanel => {
            model.host.confirm();
            None
        }

        SlideInMsg::Attach => {
            if !model.host.attach(&mut model.page) {
                return None;
            }
            let Some((kind, options)) = model.host.initial_panel().cloned() else {
                return Some(Cmd::Redraw);
            };
            match open_slide_in(model, kind, options) {
                Ok((_, cmd)) => Some(cmd),
                Err(e) => {
                    tracing::error!("Failed to open initial slide-in: {:#}", e);
                    Some(Cmd::Redraw)
                }
            }
        }

        SlideInMsg::Dispose => {
            if let Some(id) = model.host.current_id() {
                model.chain.remove(id);
            }
            model.host.dispose(&mut model.page)
        }
    }
}

/// Open a panel in the host and register it on the chained stack.
///
/// Returns the reference for the opener and the command to run.
pub fn open_slide_in(
    model: &mut AppModel,
    kind: PanelKind,
    options: OpenOptions,
) -> Result<(SlideInRef, Cmd)> {
    let previous = model.host.current_id().filter(|_| model.host.is_open());

    let (slide_in_ref, cmd) = model
        .host
        .open(&mut model.page, &model.registry, kind, options)?;

    if let Some(previous) = previous {
        model.chain.remove(previous);
    }
    model
        .chain
        .push(ChainEntry::new(kind, slide_in_ref.clone()));

    Ok((slide_in_ref, cmd))
}

/// Close whatever the host shows. No-op when nothing is open.
pub fn close_current(model: &mut AppModel) -> Option<Cmd> {
    if !model.host.is_open() {
        return None;
    }
    if let Some(id) = model.host.current_id() {
        model.chain.remove(id);
    }
    model.host.close(&mut model.page)
}

/// Backdrop click / Escape: close the topmost chained slide-in
fn close_topmost(model: &mut AppModel) -> Option<Cmd> {
    if !model.host.accepts_dismiss() {
        return None;
    }

    match model.chain.pop_component() {
        Some(entry) if Some(entry.id) == model.host.current_id() => {
            model.host.close(&mut model.page)
        }
        Some(entry) => {
            // Belongs to another host; let it close through its reference
            entry.slide_in_ref.close();
            None
        }
        None => close_current(model),
    }
}
