//! Two-button paged menu for small displays.
//!
//! The menu model and controller are pure logic and can be tested on the
//! host (no embedded hardware required). The SSD1306 display adapter and
//! the Embassy button tasks are compiled only with the `embedded` feature;
//! the JSON loader only with `loader` (which needs `std`).
//!
//! Usage: `cargo test` on the host,
//! `cargo build --release --no-default-features --features embedded` for the board.
//!
//! ```
//! use pagemenu::menu::{MenuController, MenuModel, Orientation, Page, Transition};
//!
//! let model = MenuModel::new([
//!     Page::new("Page One", ["Thing A", "Thing B"]).unwrap(),
//!     Page::new("Page Two", ["Alpha"]).unwrap(),
//! ])
//! .unwrap();
//! let mut menu = MenuController::new(model, |_: &&str| {}, Orientation::ButtonsOnRight);
//!
//! assert_eq!(menu.advance(), Transition::Redraw);
//! let screen = menu.render();
//! assert!(screen.items[0].highlighted);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod config;
pub mod error;
pub mod menu;
pub mod power_logic;
pub mod ui;

#[cfg(feature = "loader")]
pub mod loader;

pub use error::{Error, IoKind, Result};
pub use menu::{
    Button, Displayable, MenuController, MenuEvent, MenuItem, MenuModel, Orientation, Page,
    RenderItem, RenderRequest, SelectionHandler, SystemAction, Transition,
};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - layout geometry, debounce policy, button wiring, screen power
// ═══════════════════════════════════════════════════════════════════════════
