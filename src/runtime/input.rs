//! Keyboard input handling
//!
//! Maps winit key presses to messages:
//! - `1`-`4` open the built-in panels (wide when toggled with `W`)
//! - `Escape` closes the topmost slide-in, `Enter` confirms the panel
//! - `Tab` moves to the next route, `Alt+Left/Right` walk history
//! - arrows and page keys scroll the page

use winit::keyboard::{Key, ModifiersState, NamedKey};

use slidein::messages::{AppMsg, Msg, NavMsg, SlideInMsg};
use slidein::panels::{OpenOptions, PanelKind};

const LINE_SCROLL_PX: i32 = 40;
const PAGE_SCROLL_PX: i32 = 400;

/// Translate a pressed key into a message, if it is bound
pub fn key_to_msg(key: &Key, modifiers: ModifiersState, wide_next: bool) -> Option<Msg> {
    let alt = modifiers.alt_key();
    let ctrl_or_logo = modifiers.control_key() || modifiers.super_key();

    match key {
        Key::Named(NamedKey::Escape) => Some(Msg::SlideIn(SlideInMsg::Escape)),
        Key::Named(NamedKey::Enter) => Some(Msg::SlideIn(SlideInMsg::ConfirmPanel)),
        Key::Named(NamedKey::Tab) => Some(Msg::Nav(NavMsg::NextRoute)),

        Key::Named(NamedKey::ArrowLeft) if alt => Some(Msg::Nav(NavMsg::Back)),
        Key::Named(NamedKey::ArrowRight) if alt => Some(Msg::Nav(NavMsg::Forward)),

        Key::Named(NamedKey::ArrowDown) => Some(Msg::App(AppMsg::Scroll(LINE_SCROLL_PX))),
        Key::Named(NamedKey::ArrowUp) => Some(Msg::App(AppMsg::Scroll(-LINE_SCROLL_PX))),
        Key::Named(NamedKey::PageDown) => Some(Msg::App(AppMsg::Scroll(PAGE_SCROLL_PX))),
        Key::Named(NamedKey::PageUp) => Some(Msg::App(AppMsg::Scroll(-PAGE_SCROLL_PX))),

        Key::Character(c) => match c.as_str() {
            "q" | "Q" if ctrl_or_logo => Some(Msg::App(AppMsg::Quit)),
            "w" | "W" if !ctrl_or_logo => Some(Msg::App(AppMsg::ToggleWide)),
            digit => {
                let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
                let kind = *PanelKind::ALL.get(index)?;
                Some(Msg::SlideIn(SlideInMsg::Open {
                    kind,
                    options: OpenOptions::default().wide(wide_next),
                }))
            }
        },

        _ => None,
    }
}
