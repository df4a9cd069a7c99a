//! Unit tests for the menu model and navigation state machine.
//!
//! These tests run on the host (not embedded) and drive the controller
//! with logical events only - no display or buttons involved.

use super::controller::{MenuController, SelectionHandler, Transition};
use super::model::{MenuModel, Page};
use super::orientation::{Button, Orientation};
use super::render::RenderRequest;
use super::{Displayable, MenuEvent, MenuItem, SystemAction};
use crate::config::{MAX_LABEL_LEN, MAX_PAGES, MAX_PAGE_ITEMS, MAX_TITLE_LEN};
use crate::error::Error;

/// Handler that remembers every item it was given.
#[derive(Default)]
struct Recorder {
    picks: heapless::Vec<&'static str, 16>,
}

impl SelectionHandler<&'static str> for Recorder {
    fn on_select(&mut self, item: &&'static str) {
        self.picks.push(*item).unwrap();
    }
}

fn page(title: &str, items: &[&'static str]) -> Page<&'static str> {
    Page::new(title, items.iter().copied()).unwrap()
}

fn menu(pages: &[(&str, &[&'static str])]) -> MenuModel<&'static str> {
    MenuModel::new(pages.iter().map(|(title, items)| page(title, items))).unwrap()
}

fn controller(pages: &[(&str, &[&'static str])]) -> MenuController<&'static str, Recorder> {
    MenuController::new(menu(pages), Recorder::default(), Orientation::ButtonsOnRight)
}

fn three_pages() -> MenuController<&'static str, Recorder> {
    controller(&[
        ("Page One", &["Thing A", "Thing B", "Thing C"]),
        ("Page Two", &["Alpha", "Beta"]),
        ("Empty", &[]),
    ])
}

/// Owned copy of a request so it can outlive the controller borrow.
fn snapshot(req: &RenderRequest<'_>) -> (String, bool, Vec<(String, bool)>) {
    (
        req.page_title.to_string(),
        req.next_page_highlighted,
        req.items
            .iter()
            .map(|item| (item.label.to_string(), item.highlighted))
            .collect(),
    )
}

fn assert_single_highlight(req: &RenderRequest<'_>) {
    assert_eq!(req.highlight_count(), 1, "request: {:?}", req);
}

// ═══════════════════════════════════════════════════════════════════════════
// Model Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn model_rejects_zero_pages() {
    let pages: [Page<&str>; 0] = [];
    assert_eq!(MenuModel::new(pages).unwrap_err(), Error::EmptyMenu);
    assert_eq!(
        MenuModel::<&str>::builder().build().unwrap_err(),
        Error::EmptyMenu
    );
}

#[test]
fn model_page_lookup_and_counts() {
    let model = menu(&[("One", &["a", "b"]), ("Two", &[])]);
    assert_eq!(model.page_count(), 2);
    assert_eq!(model.page(0).unwrap().title(), "One");
    assert_eq!(model.page(0).unwrap().item_count(), 2);
    assert_eq!(*model.page(0).unwrap().item(1).unwrap(), "b");
    assert_eq!(model.page(1).unwrap().item_count(), 0);
}

#[test]
fn model_index_out_of_range() {
    let model = menu(&[("One", &["a"])]);
    assert_eq!(
        model.page(1).unwrap_err(),
        Error::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        model.page(0).unwrap().item(1).unwrap_err(),
        Error::IndexOutOfRange { index: 1, len: 1 }
    );
}

#[test]
fn page_rejects_too_many_items() {
    let items = ["x"; MAX_PAGE_ITEMS + 1];
    assert_eq!(
        Page::new("Big", items.iter().copied()).unwrap_err(),
        Error::CapacityExceeded {
            capacity: MAX_PAGE_ITEMS
        }
    );
}

#[test]
fn builder_rejects_too_many_pages() {
    let mut builder = MenuModel::<&str>::builder();
    for _ in 0..MAX_PAGES {
        builder.push_page(Page::empty("p")).unwrap();
    }
    assert_eq!(builder.len(), MAX_PAGES);
    assert_eq!(
        builder.push_page(Page::empty("p")).unwrap_err(),
        Error::CapacityExceeded {
            capacity: MAX_PAGES
        }
    );
}

#[test]
fn page_title_is_truncated_on_char_boundary() {
    let long = "ÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄ"; // 2 bytes per char
    let p: Page<&str> = Page::empty(long);
    assert!(p.title().len() <= MAX_TITLE_LEN);
    assert_eq!(p.title().chars().count(), MAX_TITLE_LEN / 2);
}

#[test]
fn menu_item_labels_and_payloads() {
    let plain = MenuItem::text("Thing A");
    let coded = MenuItem::coded("Rock01", 57);
    let action = MenuItem::action("Shut down", SystemAction::ShutDown);

    assert_eq!(plain.label(), "Thing A");
    assert_eq!(coded.label(), "CC 57: Rock01");
    assert_eq!(action.label(), "Shut down");

    assert_eq!(plain.name(), "Thing A");
    assert_eq!(coded.name(), "Rock01");
    assert_eq!(action.name(), "Shut down");

    assert_eq!(plain.code(), None);
    assert_eq!(coded.code(), Some(57));
    assert_eq!(action.system_action(), Some(SystemAction::ShutDown));
    assert_eq!(coded.system_action(), None);
}

#[test]
fn coded_line_is_cut_to_label_capacity() {
    let item = MenuItem::coded("Techno with a very long name", -1);
    assert_eq!(item.label().len(), MAX_LABEL_LEN);
    assert!(item.label().starts_with("CC -1: Techno"));
    assert_eq!(item.name(), "Techno with a very l");

    let extreme = MenuItem::coded("x", i32::MIN);
    assert_eq!(extreme.label(), "CC -2147483648: x");
    assert_eq!(extreme.code(), Some(i32::MIN));
}

// ═══════════════════════════════════════════════════════════════════════════
// Advance Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn initial_state_highlights_next_page() {
    let ctrl = three_pages();
    assert_eq!(ctrl.page_index(), 0);
    assert_eq!(ctrl.slot(), 0);

    let req = ctrl.render();
    assert_eq!(req.page_title, "Page One");
    assert!(req.next_page_highlighted);
    assert_eq!(req.items.len(), 3);
    assert!(req.items.iter().all(|item| !item.highlighted));
}

#[test]
fn advance_moves_highlight_down_the_list() {
    let mut ctrl = three_pages();

    assert_eq!(ctrl.advance(), Transition::Redraw);
    {
        let req = ctrl.render();
        assert!(!req.next_page_highlighted);
        assert!(req.items[0].highlighted);
        assert_eq!(req.items[0].label, "Thing A");
        assert_eq!(req.highlighted_row(), 1);
    }

    assert_eq!(ctrl.advance(), Transition::Redraw);
    assert_eq!(ctrl.slot(), 2);
    assert_eq!(ctrl.highlighted_item(), Some(&"Thing B"));
}

#[test]
fn request_can_be_held_while_reading_cursor_state() {
    let mut ctrl = three_pages();
    ctrl.advance();
    ctrl.advance();

    let req = ctrl.render();
    assert_eq!(ctrl.slot(), req.highlighted_row());
    assert_eq!(ctrl.page_index(), 0);
    assert_eq!(ctrl.current_page().title(), req.page_title);
    assert_eq!(ctrl.highlighted_item().copied(), Some(req.items[1].label));
    assert_eq!(ctrl.handler().picks.len(), 0);
}

#[test]
fn advance_cycle_closes_after_item_count_plus_one() {
    let mut ctrl = three_pages();
    for page in 0..ctrl.model().page_count() {
        assert_eq!(ctrl.page_index(), page);
        let n = ctrl.current_page().item_count();
        for step in 1..=n + 1 {
            ctrl.advance();
            assert_eq!(ctrl.slot(), step % (n + 1));
        }
        assert_eq!(ctrl.slot(), 0);
        ctrl.execute();
    }
}

#[test]
fn advance_on_empty_page_is_identity() {
    let mut ctrl = controller(&[("Nav only", &[])]);
    let before = snapshot(&ctrl.render());
    assert_eq!(ctrl.advance(), Transition::Redraw);
    let after = ctrl.render();
    assert_eq!(before, snapshot(&after));
    assert!(after.next_page_highlighted);
    assert!(after.items.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Execute Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn execute_on_nav_slot_advances_page_and_wraps() {
    let mut ctrl = three_pages();
    let count = ctrl.model().page_count();
    for i in 1..=count * 2 {
        assert_eq!(ctrl.execute(), Transition::Redraw);
        assert!(ctrl.render().next_page_highlighted);
        assert_eq!(ctrl.page_index(), i % count);
        assert_eq!(ctrl.slot(), 0);
    }
    assert!(ctrl.handler().picks.is_empty());
}

#[test]
fn execute_on_single_page_advances_to_itself() {
    let mut ctrl = controller(&[("Only", &["x", "y"])]);
    assert_eq!(ctrl.execute(), Transition::Redraw);
    assert_eq!(ctrl.render().page_title, "Only");
    assert_eq!(ctrl.page_index(), 0);
    assert_eq!(ctrl.slot(), 0);
}

#[test]
fn page_change_always_resets_slot() {
    // Reach every slot on page 0, then wrap back to slot 0 and change page.
    for target in 0..=3 {
        let mut ctrl = three_pages();
        for _ in 0..target {
            ctrl.advance();
        }
        assert_eq!(ctrl.slot(), target);
        let remaining = 4 - target;
        for _ in 0..remaining {
            ctrl.advance();
        }
        ctrl.execute();
        assert_eq!(ctrl.page_index(), 1);
        assert_eq!(ctrl.slot(), 0);
    }
}

#[test]
fn execute_on_item_calls_handler_once_without_state_change() {
    let mut ctrl = three_pages();
    ctrl.advance();
    ctrl.advance();
    let before = snapshot(&ctrl.render());

    assert_eq!(ctrl.execute(), Transition::Selected);

    assert_eq!(ctrl.handler().picks.as_slice(), &["Thing B"]);
    assert_eq!(ctrl.page_index(), 0);
    assert_eq!(ctrl.slot(), 2);
    assert_eq!(snapshot(&ctrl.render()), before);
}

#[test]
fn execute_selects_item_for_every_slot() {
    let mut ctrl = three_pages();
    for slot in 1..=3 {
        ctrl.advance();
        assert_eq!(ctrl.slot(), slot);
        ctrl.execute();
    }
    assert_eq!(
        ctrl.handler().picks.as_slice(),
        &["Thing A", "Thing B", "Thing C"]
    );
}

#[test]
fn closure_handler_receives_item() {
    let model = MenuModel::new([Page::new(
        "Utils",
        [
            MenuItem::action("Exit menu app", SystemAction::Exit),
            MenuItem::action("Shut down", SystemAction::ShutDown),
        ],
    )
    .unwrap()])
    .unwrap();

    let mut seen = None;
    {
        let mut ctrl = MenuController::new(
            model,
            |item: &MenuItem| seen = item.system_action(),
            Orientation::ButtonsOnRight,
        );
        ctrl.advance();
        ctrl.advance();
        ctrl.execute();
    }
    assert_eq!(seen, Some(SystemAction::ShutDown));
}

// ═══════════════════════════════════════════════════════════════════════════
// Render / Orientation Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn every_render_request_has_exactly_one_highlight() {
    let mut ctrl = three_pages();
    assert_single_highlight(&ctrl.render());
    // Walk a mixed event sequence that visits every slot of every page.
    let events = [
        MenuEvent::Advance,
        MenuEvent::Advance,
        MenuEvent::Advance,
        MenuEvent::Advance,
        MenuEvent::Execute,
        MenuEvent::Advance,
        MenuEvent::Execute,
        MenuEvent::Advance,
        MenuEvent::Advance,
        MenuEvent::Execute,
        MenuEvent::Advance,
        MenuEvent::Execute,
        MenuEvent::Execute,
    ];
    for event in events {
        let before = snapshot(&ctrl.render());
        let outcome = ctrl.handle(event);
        assert_single_highlight(&ctrl.render());
        if !outcome.needs_redraw() {
            assert_eq!(snapshot(&ctrl.render()), before);
        }
    }
}

#[test]
fn full_page_renders_every_item() {
    let labels = ["x"; MAX_PAGE_ITEMS];
    let mut ctrl = controller(&[("Full", &labels)]);
    for _ in 0..MAX_PAGE_ITEMS {
        ctrl.advance();
    }
    let req = ctrl.render();
    assert_eq!(req.items.len(), MAX_PAGE_ITEMS);
    assert!(req.items[MAX_PAGE_ITEMS - 1].highlighted);
    assert_single_highlight(&req);
}

#[test]
fn orientation_maps_buttons_to_events() {
    let right = Orientation::ButtonsOnRight;
    let left = Orientation::ButtonsOnLeft;
    assert_eq!(right.event_for(Button::A), MenuEvent::Execute);
    assert_eq!(right.event_for(Button::B), MenuEvent::Advance);
    assert_eq!(left.event_for(Button::A), MenuEvent::Advance);
    assert_eq!(left.event_for(Button::B), MenuEvent::Execute);

    for o in [right, left] {
        assert_ne!(o.event_for(Button::A), o.event_for(Button::B));
    }
    assert_eq!(Orientation::from_buttons_on_right(true), right);
    assert_eq!(Orientation::from_buttons_on_right(false), left);
}

#[test]
fn on_button_honours_orientation() {
    let mut right = three_pages();
    assert_eq!(right.on_button(Button::B), Transition::Redraw);
    assert_eq!(right.slot(), 1);

    let mut left = MenuController::new(
        menu(&[("Page One", &["Thing A"])]),
        Recorder::default(),
        Orientation::ButtonsOnLeft,
    );
    assert_eq!(left.on_button(Button::A), Transition::Redraw);
    assert_eq!(left.slot(), 1);
    assert_eq!(left.on_button(Button::B), Transition::Selected);
    assert_eq!(left.handler().picks.as_slice(), &["Thing A"]);
}
