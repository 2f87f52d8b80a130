//! App message handlers (window events, page scrolling)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Scroll(delta) => {
            if model.page.scroll_by(delta) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        AppMsg::ToggleWide => {
            model.wide_next = !model.wide_next;
            tracing::debug!("wide panels: {}", model.wide_next);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
