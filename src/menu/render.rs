//! Render requests - what a display should show after a transition.

use crate::config::MAX_PAGE_ITEMS;
use heapless::Vec;

/// One row of the item list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderItem<'a> {
    pub label: &'a str,
    pub highlighted: bool,
}

/// Highlight-annotated snapshot of the current page.
///
/// Labels borrow from the menu model. Exactly one of
/// `next_page_highlighted` and `items[*].highlighted` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub page_title: &'a str,
    pub next_page_highlighted: bool,
    pub items: Vec<RenderItem<'a>, MAX_PAGE_ITEMS>,
}

impl<'a> RenderRequest<'a> {
    /// Row that carries the highlight: 0 for the next-page label, `i + 1`
    /// for item `i`.
    pub fn highlighted_row(&self) -> usize {
        if self.next_page_highlighted {
            return 0;
        }
        self.items
            .iter()
            .position(|item| item.highlighted)
            .map_or(0, |i| i + 1)
    }

    /// Number of highlighted elements; 1 for every request the controller builds.
    pub fn highlight_count(&self) -> usize {
        usize::from(self.next_page_highlighted)
            + self.items.iter().filter(|item| item.highlighted).count()
    }
}
