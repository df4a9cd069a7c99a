//! Menu data - an ordered, non-empty list of titled pages.
//!
//! Built once at startup (from static data or the JSON loader) and never
//! mutated afterwards. Storage is fixed-capacity so the model works without
//! an allocator; see [`crate::config`] for the limits.

use super::truncated;
use crate::config::{MAX_PAGES, MAX_PAGE_ITEMS, MAX_TITLE_LEN};
use crate::error::{Error, Result};
use heapless::{String, Vec};

/// One page: a title plus the items shown beneath it.
///
/// A page may hold zero items, in which case only the next-page slot is
/// selectable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<I> {
    title: String<MAX_TITLE_LEN>,
    items: Vec<I, MAX_PAGE_ITEMS>,
}

impl<I> Page<I> {
    /// Create a page from a title and its items.
    ///
    /// The title is truncated to [`MAX_TITLE_LEN`] bytes.
    pub fn new<T>(title: &str, items: T) -> Result<Self>
    where
        T: IntoIterator<Item = I>,
    {
        let mut page = Self::empty(title);
        for item in items {
            page.items.push(item).map_err(|_| Error::CapacityExceeded {
                capacity: MAX_PAGE_ITEMS,
            })?;
        }
        Ok(page)
    }

    /// A navigation-only page.
    pub fn empty(title: &str) -> Self {
        Self {
            title: truncated(title),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Item at `index`, or [`Error::IndexOutOfRange`].
    pub fn item(&self, index: usize) -> Result<&I> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }
}

/// The whole menu handed to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuModel<I> {
    pages: Vec<Page<I>, MAX_PAGES>,
}

impl<I> MenuModel<I> {
    /// Build a model from its pages.
    ///
    /// Fails with [`Error::EmptyMenu`] if there are none; the controller
    /// needs at least one page to operate.
    pub fn new<T>(pages: T) -> Result<Self>
    where
        T: IntoIterator<Item = Page<I>>,
    {
        let mut builder = Self::builder();
        for page in pages {
            builder = builder.page(page)?;
        }
        builder.build()
    }

    /// Start building a model page by page.
    pub fn builder() -> MenuModelBuilder<I> {
        MenuModelBuilder { pages: Vec::new() }
    }

    /// Number of pages; always at least one.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page at `index`, or [`Error::IndexOutOfRange`].
    pub fn page(&self, index: usize) -> Result<&Page<I>> {
        self.pages.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.pages.len(),
        })
    }

    pub fn pages(&self) -> &[Page<I>] {
        &self.pages
    }
}

/// Incremental constructor for [`MenuModel`].
pub struct MenuModelBuilder<I> {
    pages: Vec<Page<I>, MAX_PAGES>,
}

impl<I> MenuModelBuilder<I> {
    /// Append a page.
    pub fn page(mut self, page: Page<I>) -> Result<Self> {
        self.push_page(page)?;
        Ok(self)
    }

    /// Append a page in place.
    pub fn push_page(&mut self, page: Page<I>) -> Result<()> {
        self.pages.push(page).map_err(|_| Error::CapacityExceeded {
            capacity: MAX_PAGES,
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Finish; fails with [`Error::EmptyMenu`] if no page was added.
    pub fn build(self) -> Result<MenuModel<I>> {
        if self.pages.is_empty() {
            return Err(Error::EmptyMenu);
        }
        Ok(MenuModel { pages: self.pages })
    }
}
