//! Chained slide-in stack
//!
//! Tracks open slide-ins in the order they were opened. Backdrop clicks and
//! Escape close the topmost one.

use crate::panels::PanelKind;
use crate::slide_in_ref::{SlideInId, SlideInRef};

#[derive(Debug, Clone)]
pub struct ChainEntry {
    pub id: SlideInId,
    pub kind: PanelKind,
    pub slide_in_ref: SlideInRef,
}

impl ChainEntry {
    pub fn new(kind: PanelKind, slide_in_ref: SlideInRef) -> Self {
        Self {
            id: slide_in_ref.id(),
            kind,
            slide_in_ref,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChainedSlideIns {
    entries: Vec<ChainEntry>,
}

impl ChainedSlideIns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChainEntry) {
        tracing::debug!("chain push {:?} ({})", entry.kind, entry.id);
        self.entries.push(entry);
    }

    /// Remove the entry for `id` wherever it sits in the stack
    pub fn remove(&mut self, id: SlideInId) -> Option<ChainEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// Pop the topmost entry; the caller closes it
    pub fn pop_component(&mut self) -> Option<ChainEntry> {
        let entry = self.entries.pop();
        if let Some(ref entry) = entry {
            tracing::debug!("chain pop {:?} ({})", entry.kind, entry.id);
        }
        entry
    }

    pub fn top(&self) -> Option<&ChainEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
