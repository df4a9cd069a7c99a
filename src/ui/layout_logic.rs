//! Screen geometry for the menu, independent of any display driver.
//!
//! ```text
//!  ButtonsOnRight                    ButtonsOnLeft
//! +--------------------------+      +--------------------------+
//! | Title              NEXT  |      | Title              NEXT  |
//! +---------------------+----+      +----+---------------------+
//! | item 0              | |> |      | |> | item 0              |
//! | item 1              |    |      |    | item 1              |
//! | item 2              | \/ |      | \/ | item 2              |
//! +---------------------+----+      +----+---------------------+
//! ```
//!
//! The execute icon sits level with the execute button, the advance icon
//! level with the advance button. When the buttons are on the left the
//! panel is rotated 180°, so the same top/bottom order still holds.

use crate::config::{
    CHAR_WIDTH, HEADER_HEIGHT, ICON_SIZE, NEXT_PAGE_LABEL, ROW_HEIGHT, WIDGET_ADVANCE_Y,
    WIDGET_AREA_WIDTH, WIDGET_EXECUTE_Y,
};
use crate::menu::Orientation;

/// Gap between the header separator and the first item row.
const LIST_TOP_GAP: i32 = 2;

/// Pixel positions of everything the menu draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    /// Left edge of the icon column.
    pub widget_x: i32,
    /// x of the vertical line between the item list and the icon column.
    pub separator_x: i32,
    /// Left edge of the item list.
    pub text_x: i32,
    /// Top-left corner of the execute (right-pointing) icon.
    pub execute_icon: (i32, i32),
    /// Top-left corner of the advance (down-pointing) icon.
    pub advance_icon: (i32, i32),
    /// Left edge of the next-page label in the header.
    pub next_label_x: i32,
}

impl Layout {
    pub fn new(orientation: Orientation, width: i32, height: i32) -> Self {
        let (widget_x, separator_x, text_x) = if orientation.buttons_on_right() {
            let x = width - WIDGET_AREA_WIDTH;
            (x, x, 0)
        } else {
            (0, WIDGET_AREA_WIDTH, WIDGET_AREA_WIDTH + 2)
        };
        let icon_x = widget_x + (WIDGET_AREA_WIDTH - ICON_SIZE) / 2;
        let next_label_x = width - NEXT_PAGE_LABEL.len() as i32 * CHAR_WIDTH - 1;

        Self {
            width,
            height,
            widget_x,
            separator_x,
            text_x,
            execute_icon: (icon_x, WIDGET_EXECUTE_Y),
            advance_icon: (icon_x, WIDGET_ADVANCE_Y),
            next_label_x,
        }
    }

    /// y of the horizontal line under the title.
    pub fn header_line_y(&self) -> i32 {
        HEADER_HEIGHT
    }

    /// How many item rows fit below the header.
    pub fn visible_rows(&self) -> usize {
        let available = self.height - HEADER_HEIGHT - LIST_TOP_GAP;
        (available.max(0) / ROW_HEIGHT) as usize
    }

    /// Top y of on-screen row `row`, or `None` if it does not fit.
    pub fn row_top(&self, row: usize) -> Option<i32> {
        if row >= self.visible_rows() {
            return None;
        }
        Some(HEADER_HEIGHT + LIST_TOP_GAP + row as i32 * ROW_HEIGHT)
    }

    /// Characters of an item label that fit between the list edge and the
    /// icon column.
    pub fn label_chars(&self) -> usize {
        let text_width = self.width - WIDGET_AREA_WIDTH - 2;
        (text_width.max(0) / CHAR_WIDTH) as usize
    }

    /// Characters of the title that fit left of the next-page label.
    pub fn title_chars(&self) -> usize {
        ((self.next_label_x - CHAR_WIDTH).max(0) / CHAR_WIDTH) as usize
    }
}

/// First item index to draw so that `highlighted` stays on screen.
///
/// Nothing scrolls while the next-page slot is highlighted.
pub fn scroll_offset(highlighted: Option<usize>, visible_rows: usize) -> usize {
    match highlighted {
        Some(index) if visible_rows > 0 && index >= visible_rows => index + 1 - visible_rows,
        _ => 0,
    }
}

/// The longest prefix of `text` with at most `max_chars` characters.
pub fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
