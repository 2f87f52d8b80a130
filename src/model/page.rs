//! Page state - body element order, scroll lock, content scroll offset

/// Overflow style of the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Page content scrolls normally
    #[default]
    Auto,
    /// Scrolling disabled while a slide-in is open
    Hidden,
}

/// Root element of the main console content
pub const APP_ROOT: &str = "app-root";

/// Furthest the page content can scroll (pixels)
pub const MAX_SCROLL_OFFSET: i32 = 4000;

/// The document the slide-in host lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Overflow style on the body; only the slide-in host changes it
    body_overflow: Overflow,
    /// Body children in stacking order (last is drawn on top)
    body: Vec<String>,
    /// Vertical scroll offset of the main content
    scroll_offset: i32,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            body_overflow: Overflow::Auto,
            body: vec![APP_ROOT.to_string()],
            scroll_offset: 0,
        }
    }

    pub fn body_overflow(&self) -> Overflow {
        self.body_overflow
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.body_overflow == Overflow::Hidden
    }

    pub fn lock_scroll(&mut self) {
        self.body_overflow = Overflow::Hidden;
    }

    pub fn unlock_scroll(&mut self) {
        self.body_overflow = Overflow::Auto;
    }

    /// Move (or insert) an element to the end of the body so it stacks
    /// above everything else
    pub fn append_to_body(&mut self, id: &str) {
        self.body.retain(|el| el != id);
        self.body.push(id.to_string());
    }

    /// Remove an element from the body. Returns false if it was not there.
    pub fn remove_element(&mut self, id: &str) -> bool {
        let before = self.body.len();
        self.body.retain(|el| el != id);
        self.body.len() != before
    }

    pub fn body_elements(&self) -> &[String] {
        &self.body
    }

    pub fn is_topmost(&self, id: &str) -> bool {
        self.body.last().is_some_and(|el| el == id)
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Scroll the main content. Ignored while scrolling is locked.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if self.is_scroll_locked() {
            return false;
        }
        let next = self
            .scroll_offset
            .saturating_add(delta)
            .clamp(0, MAX_SCROLL_OFFSET);
        let changed = next != self.scroll_offset;
        self.scroll_offset = next;
        changed
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_moves_element_to_end() {
        let mut page = PageState::new();
        page.append_to_body("slide-in");
        page.append_to_body("toast");
        page.append_to_body("slide-in");

        assert_eq!(page.body_elements(), &[APP_ROOT, "toast", "slide-in"]);
        assert!(page.is_topmost("slide-in"));
    }

    #[test]
    fn test_remove_element() {
        let mut page = PageState::new();
        page.append_to_body("slide-in");
        assert!(page.remove_element("slide-in"));
        assert!(!page.remove_element("slide-in"));
        assert_eq!(page.body_elements(), &[APP_ROOT]);
    }

    #[test]
    fn test_scroll_blocked_while_locked() {
        let mut page = PageState::new();
        assert!(page.scroll_by(120));
        assert_eq!(page.scroll_offset(), 120);

        page.lock_scroll();
        assert!(!page.scroll_by(120));
        assert_eq!(page.scroll_offset(), 120);

        page.unlock_scroll();
        assert!(page.scroll_by(-500));
        assert_eq!(page.scroll_offset(), 0);

        // Extreme deltas saturate at the ends
        page.scroll_by(100);
        assert!(page.scroll_by(i32::MAX));
        assert_eq!(page.scroll_offset(), MAX_SCROLL_OFFSET);
        assert!(page.scroll_by(i32::MIN));
        assert_eq!(page.scroll_offset(), 0);
    }
}
