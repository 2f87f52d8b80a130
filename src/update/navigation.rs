//! Navigation message handlers
//!
//! Route changes only update the router and history here. The slide-in host
//! learns about them through its navigation watcher, which queues a
//! `SlideInMsg::Navigated` tagged with the panel open at that moment.

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::AppModel;

/// Handle navigation messages
pub fn update_navigation(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    let changed = match msg {
        NavMsg::Navigate(route) => model.nav.navigate(route),
        NavMsg::NextRoute => {
            let next = model.nav.current().next();
            model.nav.navigate(next)
        }
        NavMsg::Back => model.nav.back().is_some(),
        NavMsg::Forward => model.nav.forward().is_some(),
    };

    if changed {
        tracing::debug!("route is now {}", model.nav.current().url());
        Some(Cmd::Redraw)
    } else {
        None
    }
}
