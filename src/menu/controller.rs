//! Two-button navigation state machine.
//!
//! Cursor state is a page index plus a slot on that page. Slot 0 is the
//! "next page" slot; slots `1..=n` address the page's `n` items. Every
//! transition runs to completion and reports a [`Transition`]: either the
//! screen changed, or the highlighted item went to the [`SelectionHandler`].
//!
//! The controller never draws. After a [`Transition::Redraw`] callers take a
//! [`RenderRequest`] from [`MenuController::render`] and hand it to a display
//! adapter themselves.

use super::model::{MenuModel, Page};
use super::orientation::{Button, Orientation};
use super::render::{RenderItem, RenderRequest};
use super::{Displayable, MenuEvent};
use heapless::Vec;

/// Receives the item the user executed.
///
/// Called synchronously from [`MenuController::execute`]. It may have any
/// side effect, including never returning.
pub trait SelectionHandler<I> {
    fn on_select(&mut self, item: &I);
}

impl<I, F> SelectionHandler<I> for F
where
    F: FnMut(&I),
{
    fn on_select(&mut self, item: &I) {
        self(item)
    }
}

/// Outcome of one controller transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Page or cursor changed; [`MenuController::render`] has the new screen.
    Redraw,
    /// The highlighted item went to the handler. Nothing changed on screen.
    Selected,
}

impl Transition {
    pub fn needs_redraw(self) -> bool {
        matches!(self, Transition::Redraw)
    }
}

/// Menu cursor plus the model it walks over.
pub struct MenuController<I, H> {
    model: MenuModel<I>,
    handler: H,
    orientation: Orientation,
    page: usize,
    slot: usize,
}

impl<I, H> MenuController<I, H>
where
    I: Displayable,
    H: SelectionHandler<I>,
{
    /// Start on page 0 with the next-page slot highlighted.
    ///
    /// `orientation` only affects [`on_button`](Self::on_button); render
    /// output is the same either way.
    pub fn new(model: MenuModel<I>, handler: H, orientation: Orientation) -> Self {
        Self {
            model,
            handler,
            orientation,
            page: 0,
            slot: 0,
        }
    }

    /// Process one logical event.
    pub fn handle(&mut self, event: MenuEvent) -> Transition {
        match event {
            MenuEvent::Advance => self.advance(),
            MenuEvent::Execute => self.execute(),
        }
    }

    /// Map a physical button through the orientation, then [`handle`](Self::handle) it.
    pub fn on_button(&mut self, button: Button) -> Transition {
        let event = self.orientation.event_for(button);
        self.handle(event)
    }

    /// Move the cursor one slot down, wrapping back to the next-page slot.
    ///
    /// On a page with no items this leaves the cursor on slot 0.
    pub fn advance(&mut self) -> Transition {
        let slots = self.model.pages()[self.page].item_count() + 1;
        self.slot = (self.slot + 1) % slots;

        #[cfg(feature = "defmt")]
        defmt::debug!("menu: advance -> page {} slot {}", self.page, self.slot);

        Transition::Redraw
    }

    /// Next page when on slot 0, otherwise select the highlighted item.
    ///
    /// With a single page, "next page" lands on the same page again.
    pub fn execute(&mut self) -> Transition {
        if self.slot == 0 {
            self.page = (self.page + 1) % self.model.page_count();
            self.slot = 0;

            #[cfg(feature = "defmt")]
            defmt::debug!("menu: page -> {}", self.page);

            return Transition::Redraw;
        }

        // slot stays within 1..=item_count, so both indexes are in range.
        let item = &self.model.pages()[self.page].items()[self.slot - 1];

        #[cfg(feature = "defmt")]
        defmt::debug!("menu: select page {} item {}", self.page, self.slot - 1);

        self.handler.on_select(item);
        Transition::Selected
    }

    /// Snapshot of the current state: after boot and after every
    /// [`Transition::Redraw`].
    pub fn render(&self) -> RenderRequest<'_> {
        let page = self.current_page();
        let mut items = Vec::new();
        for (i, item) in page.items().iter().enumerate() {
            let pushed = items.push(RenderItem {
                label: item.label(),
                highlighted: self.slot == i + 1,
            });
            debug_assert!(pushed.is_ok(), "render request smaller than a page");
        }
        RenderRequest {
            page_title: page.title(),
            next_page_highlighted: self.slot == 0,
            items,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    /// Cursor slot: 0 for next-page, `i + 1` for item `i`.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn current_page(&self) -> &Page<I> {
        &self.model.pages()[self.page]
    }

    /// The item under the cursor, or `None` on the next-page slot.
    pub fn highlighted_item(&self) -> Option<&I> {
        let index = self.slot.checked_sub(1)?;
        self.current_page().items().get(index)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn model(&self) -> &MenuModel<I> {
        &self.model
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
