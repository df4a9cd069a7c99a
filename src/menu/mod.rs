//! Menu core - page/item model and the two-button navigation state machine.
//!
//! Everything in here is pure logic: no drawing, no GPIO, no allocation.
//! The display and input adapters in [`crate::ui`] sit on either side.
//!
//! ## Components
//!
//! - **Model**: pages of opaque [`Displayable`] items
//! - **Controller**: cursor state, event handling, selection dispatch
//! - **Render**: the highlight-annotated snapshot handed to a display

pub mod controller;
pub mod model;
pub mod orientation;
pub mod render;

#[cfg(test)]
mod tests;

use crate::config::{CODE_LABEL_PREFIX, MAX_LABEL_LEN};
use core::fmt::Write;
use heapless::String;

pub use controller::{MenuController, SelectionHandler, Transition};
pub use model::{MenuModel, MenuModelBuilder, Page};
pub use orientation::{Button, Orientation};
pub use render::{RenderItem, RenderRequest};

/// Anything that can be shown as a single line in the menu.
pub trait Displayable {
    /// Text drawn for this item.
    fn label(&self) -> &str;
}

impl Displayable for &str {
    fn label(&self) -> &str {
        self
    }
}

impl<const N: usize> Displayable for String<N> {
    fn label(&self) -> &str {
        self.as_str()
    }
}

/// The two logical events the controller consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEvent {
    /// "Do it" - next page on slot 0, otherwise select the highlighted item.
    Execute,
    /// Move the cursor one slot down, wrapping to the next-page slot.
    Advance,
}

/// Built-in actions the firmware knows how to carry out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemAction {
    /// Leave the menu: blank the panel and stop handling input.
    Exit,
    /// Blank the panel and put the device to sleep for good.
    ShutDown,
}

/// Stock item type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    /// Plain text; selecting it just hands it back.
    Label(String<MAX_LABEL_LEN>),
    /// Text with an integer payload (e.g. a `[label, code]` pair from JSON).
    ///
    /// Shown as `CC {code}: {name}`; `line` holds that text, cut to fit.
    Coded {
        name: String<MAX_LABEL_LEN>,
        code: i32,
        line: String<MAX_LABEL_LEN>,
    },
    /// Text bound to a [`SystemAction`].
    Action {
        label: String<MAX_LABEL_LEN>,
        action: SystemAction,
    },
}

impl MenuItem {
    pub fn text(label: &str) -> Self {
        MenuItem::Label(truncated(label))
    }

    pub fn coded(name: &str, code: i32) -> Self {
        let mut line: String<MAX_LABEL_LEN> = String::new();
        // "CC -2147483648: " is 16 bytes, so the prefix always fits.
        let prefixed = write!(line, "{} {}: ", CODE_LABEL_PREFIX, code);
        debug_assert!(prefixed.is_ok());
        for c in name.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        MenuItem::Coded {
            name: truncated(name),
            code,
            line,
        }
    }

    /// The item's own text, without the code prefix a coded item is drawn with.
    pub fn name(&self) -> &str {
        match self {
            MenuItem::Label(name)
            | MenuItem::Coded { name, .. }
            | MenuItem::Action { label: name, .. } => name.as_str(),
        }
    }

    pub fn action(label: &str, action: SystemAction) -> Self {
        MenuItem::Action {
            label: truncated(label),
            action,
        }
    }

    /// Integer payload, if this is a coded item.
    pub fn code(&self) -> Option<i32> {
        match self {
            MenuItem::Coded { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// System action, if this is an action item.
    pub fn system_action(&self) -> Option<SystemAction> {
        match self {
            MenuItem::Action { action, .. } => Some(*action),
            _ => None,
        }
    }
}

impl Displayable for MenuItem {
    fn label(&self) -> &str {
        match self {
            MenuItem::Label(label) | MenuItem::Action { label, .. } => label.as_str(),
            MenuItem::Coded { line, .. } => line.as_str(),
        }
    }
}

/// Copy `text` into a fixed-capacity string, dropping whatever does not fit.
///
/// Truncation happens on a char boundary.
pub(crate) fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
