//! Navigation state: which page is shown and how far it is scrolled.

/// Top-level pages, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Overview of the processor, features and caches.
    #[default]
    Summary,
    /// Every collected CPU detail.
    Cpu,
}

impl Page {
    /// All pages in menu order.
    pub const ALL: [Self; 2] = [Self::Summary, Self::Cpu];

    /// Menu bar labels, in menu order.
    pub const LABELS: [&'static str; 2] = ["Summary", "CPU"];

    /// Title shown in the top border when no page-specific one applies.
    pub const FALLBACK_TITLE: &'static str = "HARDWARE INFORMATION";

    /// Position in the menu.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Page at menu position `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label in the menu bar.
    pub const fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }

    /// Title in the top border.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Summary => "HARDWARE SUMMARY",
            Self::Cpu => "CPU INFORMATION",
        }
    }
}

/// Page and vertical scroll offset.
///
/// The offset has no upper bound; scrolling past the content shows an empty
/// content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    page: Page,
    scroll: u32,
}

impl ViewState {
    /// First page, unscrolled.
    pub const fn new() -> Self {
        Self {
            page: Page::Summary,
            scroll: 0,
        }
    }

    /// Page being shown.
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Lines scrolled past the top.
    pub const fn scroll_offset(&self) -> u32 {
        self.scroll
    }

    /// Step through the pages with wraparound; resets the scroll offset.
    pub fn advance_page(&mut self, delta: i32) {
        let count = i64::try_from(Page::ALL.len()).unwrap_or(1);
        let current = i64::try_from(self.page.index()).unwrap_or(0);
        let next = (current + i64::from(delta)).rem_euclid(count);
        let next = usize::try_from(next).unwrap_or(0);
        self.page = Page::from_index(next).unwrap_or_default();
        self.scroll = 0;
    }

    /// Jump to page `index`; resets the scroll offset.
    ///
    /// Returns `false` and leaves the state alone if `index` is out of range.
    pub fn set_page(&mut self, index: usize) -> bool {
        match Page::from_index(index) {
            Some(page) => {
                self.page = page;
                self.scroll = 0;
                true
            }
            None => false,
        }
    }

    /// Move the offset by `delta` lines, stopping at 0.
    pub fn scroll(&mut self, delta: i32) {
        self.scroll = if delta >= 0 {
            self.scroll.saturating_add(delta.unsigned_abs())
        } else {
            self.scroll.saturating_sub(delta.unsigned_abs())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.page(), Page::Summary);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        let mut state = ViewState::new();
        state.advance_page(1);
        assert_eq!(state.page(), Page::Cpu);
        state.advance_page(1);
        assert_eq!(state.page(), Page::Summary);
        state.advance_page(-1);
        assert_eq!(state.page(), Page::Cpu);
        state.advance_page(-3);
        assert_eq!(state.page(), Page::Summary);
    }

    #[test]
    fn test_page_change_resets_scroll() {
        let mut state = ViewState::new();
        state.scroll(7);
        state.advance_page(1);
        assert_eq!(state.scroll_offset(), 0);

        state.scroll(3);
        assert!(state.set_page(0));
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(state.page(), Page::Summary);
    }

    #[test]
    fn test_set_page_out_of_range_ignored() {
        let mut state = ViewState::new();
        state.scroll(4);
        assert!(!state.set_page(2));
        assert_eq!(state.page(), Page::Summary);
        assert_eq!(state.scroll_offset(), 4);
    }

    #[test]
    fn test_scroll_clamps_at_zero() {
        let mut state = ViewState::new();
        state.scroll(-1);
        assert_eq!(state.scroll_offset(), 0);
        state.scroll(2);
        state.scroll(-5);
        assert_eq!(state.scroll_offset(), 0);
        state.scroll(50);
        assert_eq!(state.scroll_offset(), 50);
    }

    #[test]
    fn test_titles_and_labels() {
        assert_eq!(Page::Summary.title(), "HARDWARE SUMMARY");
        assert_eq!(Page::Cpu.title(), "CPU INFORMATION");
        assert_eq!(Page::Cpu.label(), "CPU");
        assert_eq!(Page::from_index(1), Some(Page::Cpu));
    }
}
