//! JSON menu data.
//!
//! The document is an array of pages. A page is either a bare array of
//! items, titled `Page 1`, `Page 2`, ... by position, or an object with an
//! explicit title:
//!
//! ```json
//! [
//!   [["Rock01", 57], ["Rock02", 58]],
//!   { "title": "Utils", "items": [{ "label": "Exit", "action": "exit" }] }
//! ]
//! ```
//!
//! An item is `[label, code]`, `[label]` (code `-1`), a plain `"label"`, or
//! `{ "label": ..., "action": "exit" | "shutdown" }`.

use crate::error::{Error, Result};
use crate::menu::{MenuItem, MenuModel, Page, SystemAction};
use serde::Deserialize;
use std::path::Path;

/// Code given to `[label]` items that carry none.
const DEFAULT_CODE: i32 = -1;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage {
    // Bare first: serde would also accept `[title, [items]]` for Titled.
    Bare(Vec<RawItem>),
    Titled { title: String, items: Vec<RawItem> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Pair(String, i32),
    Single((String,)),
    Text(String),
    Action { label: String, action: RawAction },
}

#[derive(Deserialize)]
enum RawAction {
    #[serde(rename = "exit")]
    Exit,
    #[serde(rename = "shutdown")]
    ShutDown,
}

impl RawItem {
    fn into_item(self) -> MenuItem {
        match self {
            RawItem::Pair(label, code) => MenuItem::coded(&label, code),
            RawItem::Single((label,)) => MenuItem::coded(&label, DEFAULT_CODE),
            RawItem::Text(label) => MenuItem::text(&label),
            RawItem::Action { label, action } => {
                let action = match action {
                    RawAction::Exit => SystemAction::Exit,
                    RawAction::ShutDown => SystemAction::ShutDown,
                };
                MenuItem::action(&label, action)
            }
        }
    }
}

/// Parse a menu from JSON text.
pub fn load_menu(json: &str) -> Result<MenuModel<MenuItem>> {
    let raw: Vec<RawPage> = serde_json::from_str(json).map_err(|e| Error::Parse {
        line: e.line(),
        column: e.column(),
    })?;

    let mut builder = MenuModel::builder();
    for (n, page) in raw.into_iter().enumerate() {
        let (title, items) = match page {
            RawPage::Titled { title, items } => (title, items),
            RawPage::Bare(items) => (format!("Page {}", n + 1), items),
        };
        builder.push_page(Page::new(&title, items.into_iter().map(RawItem::into_item))?)?;
    }
    builder.build()
}

/// Read and parse a menu file.
pub fn load_menu_file(path: impl AsRef<Path>) -> Result<MenuModel<MenuItem>> {
    let text = std::fs::read_to_string(path)?;
    load_menu(&text)
}
