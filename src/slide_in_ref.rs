//! Handle to a displayed slide-in panel
//!
//! A `SlideInRef` is handed to whoever opened the panel and to the panel
//! itself. Either side may close it; only the first close reaches the host.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use uuid::Uuid;

use crate::messages::{Msg, SlideInMsg};

/// Unique identifier generated for every opened panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideInId(pub Uuid);

impl SlideInId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideInId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlideInId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-held handle to the panel currently shown by a slide-in host
///
/// Clones share the closed flag, so `close()` is idempotent across every
/// holder of the handle.
#[derive(Debug, Clone)]
pub struct SlideInRef {
    id: SlideInId,
    closed: Rc<Cell<bool>>,
    tx: Sender<Msg>,
}

impl SlideInRef {
    /// Create a fresh handle that reports close requests through `tx`
    pub fn new(tx: Sender<Msg>) -> Self {
        Self {
            id: SlideInId::new(),
            closed: Rc::new(Cell::new(false)),
            tx,
        }
    }

    pub fn id(&self) -> SlideInId {
        self.id
    }

    /// Whether this panel has been closed (by any holder or by the host)
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Request the host to close this panel.
    ///
    /// The request is processed on the next update pass. Calling `close`
    /// again, or after the host closed the panel itself, does nothing.
    pub fn close(&self) {
        if self.closed.replace(true) {
            tracing::debug!("slide-in {} already closed, ignoring close()", self.id);
            return;
        }

        if self
            .tx
            .send(Msg::SlideIn(SlideInMsg::CloseRef(self.id)))
            .is_err()
        {
            tracing::warn!("slide-in {} close request dropped: host is gone", self.id);
        }
    }

    /// Record that the host closed the panel through another path
    /// (backdrop, Escape, navigation, dispose).
    pub(crate) fn mark_closed(&self) {
        self.closed.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_close_sends_one_request() {
        let (tx, rx) = mpsc::channel();
        let slide_in_ref = SlideInRef::new(tx);

        slide_in_ref.close();
        slide_in_ref.close();

        let msgs: Vec<Msg> = rx.try_iter().collect();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(
            msgs[0],
            Msg::SlideIn(SlideInMsg::CloseRef(id)) if id == slide_in_ref.id()
        ));
        assert!(slide_in_ref.is_closed());
    }

    #[test]
    fn test_clones_share_closed_flag() {
        let (tx, rx) = mpsc::channel();
        let opener = SlideInRef::new(tx);
        let panel = opener.clone();

        panel.close();
        opener.close();

        assert_eq!(rx.try_iter().count(), 1);
        assert!(opener.is_closed());
    }

    #[test]
    fn test_mark_closed_suppresses_request() {
        let (tx, rx) = mpsc::channel();
        let slide_in_ref = SlideInRef::new(tx);

        slide_in_ref.mark_closed();
        slide_in_ref.close();

        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_close_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        let slide_in_ref = SlideInRef::new(tx);
        drop(rx);

        slide_in_ref.close();
        assert!(slide_in_ref.is_closed());
    }

    #[test]
    fn test_ids_are_unique() {
        let (tx, _rx) = mpsc::channel();
        let a = SlideInRef::new(tx.clone());
        let b = SlideInRef::new(tx);
        assert_ne!(a.id(), b.id());
    }
}
