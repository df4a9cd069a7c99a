//! Application-wide constants and compile-time configuration.
//!
//! Capacities, timing parameters, and display geometry live here so they
//! can be tuned in one place. Runtime pin wiring is passed explicitly via
//! [`ButtonConfig`](crate::ui::ButtonConfig) instead.

use crate::menu::Orientation;

// Menu capacities

/// Maximum number of pages a menu can hold.
pub const MAX_PAGES: usize = 8;

/// Maximum number of items on a single page.
///
/// Five rows of 10 px text fit under the header on a 64 px tall panel;
/// longer pages scroll to keep the highlighted row visible.
pub const MAX_PAGE_ITEMS: usize = 12;

/// Maximum page-title length in bytes (longer titles are truncated).
pub const MAX_TITLE_LEN: usize = 16;

/// Maximum item-label length in bytes (longer labels are truncated).
pub const MAX_LABEL_LEN: usize = 20;

/// Prefix of the on-screen line of a coded item: `CC 57: Rock01`.
pub const CODE_LABEL_PREFIX: &str = "CC";

/// Label drawn in the page-navigation slot.
pub const NEXT_PAGE_LABEL: &str = "NEXT";

// Buttons

/// Minimum spacing between two accepted presses on the same button (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 300;

/// Depth of the button-event channel between the button tasks and the UI loop.
pub const BUTTON_CHANNEL_DEPTH: usize = 4;

/// Enable automatic OLED screen power-off after inactivity.
pub const SCREEN_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before the OLED is turned off (ms).
pub const SCREEN_AUTO_OFF_TIMEOUT_MS: u64 = 120_000;

/// How often the UI loop checks the inactivity timeout (ms).
pub const SCREEN_TICK_MS: u64 = 1_000;

/// Which side of the panel the buttons sit on when the device is assembled.
pub const DEFAULT_ORIENTATION: Orientation = Orientation::ButtonsOnRight;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` pins
// are picked in `main.rs` and handed over in a `ButtonConfig`.
//
//   Button A (upper) → P0.11
//   Button B (lower) → P0.12
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27

// Display geometry (SSD1306 128×64)

/// Panel width in pixels.
pub const DISPLAY_WIDTH: i32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: i32 = 64;

/// Height of the title bar; a separator line is drawn at this y.
pub const HEADER_HEIGHT: i32 = 11;

/// Width of the button-icon column at the side of the panel.
pub const WIDGET_AREA_WIDTH: i32 = 14;

/// Edge length of the two button icons.
pub const ICON_SIZE: i32 = 8;

/// Vertical distance between two text rows (FONT_6X10).
pub const ROW_HEIGHT: i32 = 10;

/// Character cell width of the font (FONT_6X10).
pub const CHAR_WIDTH: i32 = 6;

/// Top of the execute-button icon, level with button A.
pub const WIDGET_EXECUTE_Y: i32 = 18;

/// Top of the advance-button icon, level with button B.
pub const WIDGET_ADVANCE_Y: i32 = 44;
