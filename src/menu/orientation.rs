//! Physical button layout.
//!
//! The panel can be mounted either way up. Flipping it swaps which physical
//! button sits next to which on-screen icon, so the mapping from button to
//! logical event flips too. Cursor math never looks at this.

use super::MenuEvent;

/// The two physical buttons. A sits above B when the buttons are on the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
}

/// Which side of the panel the buttons are on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Normal mounting, panel not rotated.
    #[default]
    ButtonsOnRight,
    /// Panel rotated 180°.
    ButtonsOnLeft,
}

impl Orientation {
    pub fn from_buttons_on_right(on_right: bool) -> Self {
        if on_right {
            Orientation::ButtonsOnRight
        } else {
            Orientation::ButtonsOnLeft
        }
    }

    pub fn buttons_on_right(self) -> bool {
        matches!(self, Orientation::ButtonsOnRight)
    }

    /// Logical event produced by pressing `button` in this orientation.
    pub fn event_for(self, button: Button) -> MenuEvent {
        match (self, button) {
            (Orientation::ButtonsOnRight, Button::A) => MenuEvent::Execute,
            (Orientation::ButtonsOnRight, Button::B) => MenuEvent::Advance,
            (Orientation::ButtonsOnLeft, Button::A) => MenuEvent::Advance,
            (Orientation::ButtonsOnLeft, Button::B) => MenuEvent::Execute,
        }
    }
}
