//! User interface subsystem - OLED display + two physical buttons.
//!
//! The menu controller is pure; this module is what connects it to the
//! panel. Button tasks post physical button presses to a channel, the UI
//! loop feeds them to the controller one at a time (which maps them through
//! the orientation), and the screen is redrawn here whenever it changed.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 2 tactile switches with debouncing (A upper, B lower)
//! - **Layout / input logic**: host-testable geometry and debounce policy

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;
pub mod layout_logic;

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::error::Result;
use crate::menu::{Button, Orientation, RenderRequest};

/// Anything that can show a menu render request.
pub trait MenuDisplay {
    /// Redraw the whole screen for `request`.
    ///
    /// `orientation` decides which side the button icons go on.
    fn draw(&mut self, request: &RenderRequest<'_>, orientation: Orientation) -> Result<()>;

    /// Blank the screen.
    fn clear(&mut self) -> Result<()>;

    /// Switch the panel (or its backlight) on or off.
    fn set_backlight(&mut self, on: bool) -> Result<()>;
}

/// Pins of the two buttons plus the debounce spacing shared by both.
///
/// Which button advances and which executes is not decided here; the
/// controller maps [`Button`]s through its orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonConfig<P> {
    pub button_a: P,
    pub button_b: P,
    pub debounce_ms: u64,
}

impl<P> ButtonConfig<P> {
    pub fn new(button_a: P, button_b: P) -> Self {
        Self {
            button_a,
            button_b,
            debounce_ms: BUTTON_DEBOUNCE_MS,
        }
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Each pin paired with the button it belongs to.
    pub fn into_pins(self) -> [(Button, P); 2] {
        [(Button::A, self.button_a), (Button::B, self.button_b)]
    }
}
