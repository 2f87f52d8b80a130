//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::navigation::Route;
use crate::panels::{OpenOptions, PanelKind};
use crate::slide_in_ref::SlideInId;

/// Slide-in host messages (open/close requests, timer completion, lifecycle)
#[derive(Debug, Clone)]
pub enum SlideInMsg {
    /// Open a panel of the given kind, replacing whatever is shown
    Open {
        kind: PanelKind,
        options: OpenOptions,
    },
    /// Close request sent by a `SlideInRef`
    CloseRef(SlideInId),
    /// Click outside the panel
    BackdropClicked,
    /// Escape pressed anywhere in the document
    Escape,
    /// History or router navigation completed while the given panel was
    /// open (`None` if nothing was open)
    Navigated(Option<SlideInId>),
    /// Deferred clear timer fired
    ClearElapsed { generation: u64 },
    /// Forward a confirm action (Enter) to the active panel
    ConfirmPanel,
    /// Mount the host into the page
    Attach,
    /// Unmount the host and release its subscriptions
    Dispose,
}

/// In-app navigation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    /// Router navigation to a route
    Navigate(Route),
    /// Navigate to the next top-level route (wraps around)
    NextRoute,
    /// Browser history back
    Back,
    /// Browser history forward
    Forward,
}

/// Application-level messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Window resized to (width, height)
    Resize(u32, u32),
    /// Scroll the page content (positive = down)
    Scroll(i32),
    /// Toggle wide mode for the next panel opened from the keyboard
    ToggleWide,
    /// Exit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    SlideIn(SlideInMsg),
    Nav(NavMsg),
    App(AppMsg),
}
