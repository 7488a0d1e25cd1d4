//! Pagination component for navigating pages
//!
//! Displays previous/next buttons, page numbers with ellipses and an
//! optional item total.
//!
//! # Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! let page = scope.use_state_keyed("page", || 1usize);
//!
//! cn::pagination(250, 10, &page)?
//!     .show_total(|total, (start, end)| format!("{}-{} of {}", start, end, total))
//!     .on_change(|page| println!("Go to page {}", page))
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use stc_core::State;

use super::button::{button, Button, ButtonVariant, ButtonView};
use crate::error::{ComponentError, Result};
use crate::size::ComponentSize;

/// Labels and page window settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationTexts {
    /// Pages shown on each side of the current page
    pub sibling_count: usize,
    pub previous_label: String,
    pub next_label: String,
}

impl Default for PaginationTexts {
    fn default() -> Self {
        Self {
            sibling_count: 2,
            previous_label: "Previous".to_string(),
            next_label: "Next".to_string(),
        }
    }
}

/// Entry of the page list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageItem {
    Page(usize),
    Dots,
}

/// Compute the visible page list
///
/// All pages are listed when they fit in `sibling_count + 5` slots.
/// Otherwise the first and last pages stay visible and the window around
/// `current` is separated from them by [`PageItem::Dots`]. Dots always hide
/// at least one page.
pub fn page_items(current: usize, total_pages: usize, sibling_count: usize) -> Vec<PageItem> {
    use self::PageItem::{Dots, Page};

    if sibling_count + 5 >= total_pages {
        return (1..=total_pages).map(Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let left = current.saturating_sub(sibling_count).max(1);
    let right = (current + sibling_count).min(total_pages);
    let show_left_dots = left > 2;
    let show_right_dots = right + 2 < total_pages;
    let edge_count = 3 + 2 * sibling_count;

    match (show_left_dots, show_right_dots) {
        (false, true) => {
            let end = edge_count.min(total_pages - 2);
            (1..=end).map(Page).chain([Dots, Page(total_pages)]).collect()
        }
        (true, false) => {
            let start = (total_pages + 1).saturating_sub(edge_count).max(3);
            [Page(1), Dots]
                .into_iter()
                .chain((start..=total_pages).map(Page))
                .collect()
        }
        (true, true) => [Page(1), Dots]
            .into_iter()
            .chain((left..=right).map(Page))
            .chain([Dots, Page(total_pages)])
            .collect(),
        (false, false) => (1..=total_pages).map(Page).collect(),
    }
}

/// First and last item numbers shown on `current`
pub fn item_range(total_items: usize, items_per_page: usize, current: usize) -> (usize, usize) {
    let start = items_per_page * current.saturating_sub(1) + 1;
    let end = (items_per_page * current).min(total_items);
    (start, end)
}

/// Which side the total text sits on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalPosition {
    #[default]
    Left,
    Right,
}

/// Callback receiving the requested page
pub type PageChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Formats the total text from `(total_items, (start, end))`
pub type ShowTotalFn = Arc<dyn Fn(usize, (usize, usize)) -> String + Send + Sync>;

/// Total text next to the controls
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TotalView {
    pub text: String,
    pub position: TotalPosition,
}

/// Entry of the rendered page list
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageItemView {
    Page {
        page: usize,
        current: bool,
        button: ButtonView,
    },
    Ellipsis {
        text: String,
    },
}

/// Render description of a [`Pagination`]
#[derive(Clone, Debug, Serialize)]
pub struct PaginationView {
    pub size: ComponentSize,
    pub disabled: bool,
    pub total: Option<TotalView>,
    pub previous: ButtonView,
    pub items: Vec<PageItemView>,
    pub next: ButtonView,
}

/// Pagination component
pub struct Pagination {
    total_items: usize,
    items_per_page: usize,
    current: State<usize>,
    on_change: Option<PageChangeCallback>,
    size: ComponentSize,
    borderless: bool,
    disabled: bool,
    show_total: Option<ShowTotalFn>,
    total_position: TotalPosition,
    texts: PaginationTexts,
}

impl std::fmt::Debug for Pagination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pagination")
            .field("total_items", &self.total_items)
            .field("items_per_page", &self.items_per_page)
            .field("current", &self.current_page())
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl Pagination {
    /// Create pagination over `total_items`; the current page lives in `current`
    pub fn new(total_items: usize, items_per_page: usize, current: &State<usize>) -> Result<Self> {
        if items_per_page == 0 {
            return Err(ComponentError::ZeroItemsPerPage);
        }
        Ok(Self {
            total_items,
            items_per_page,
            current: current.clone(),
            on_change: None,
            size: ComponentSize::default(),
            borderless: false,
            disabled: false,
            show_total: None,
            total_position: TotalPosition::default(),
            texts: PaginationTexts::default(),
        })
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    /// Render previous/next as text buttons
    pub fn borderless(mut self, borderless: bool) -> Self {
        self.borderless = borderless;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn show_total<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, (usize, usize)) -> String + Send + Sync + 'static,
    {
        self.show_total = Some(Arc::new(f));
        self
    }

    pub fn total_position(mut self, position: TotalPosition) -> Self {
        self.total_position = position;
        self
    }

    pub fn texts(mut self, texts: PaginationTexts) -> Self {
        self.texts = texts;
        self
    }

    pub fn previous_label(mut self, label: impl Into<String>) -> Self {
        self.texts.previous_label = label.into();
        self
    }

    pub fn next_label(mut self, label: impl Into<String>) -> Self {
        self.texts.next_label = label.into();
        self
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Current page, at least 1
    pub fn current_page(&self) -> usize {
        self.current.get().max(1)
    }

    pub fn item_range(&self) -> (usize, usize) {
        item_range(self.total_items, self.items_per_page, self.current_page())
    }

    pub fn pages(&self) -> Vec<PageItem> {
        page_items(
            self.current_page(),
            self.total_pages(),
            self.texts.sibling_count,
        )
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Move to `page`; false when disabled or out of range
    pub fn go_to(&self, page: usize) -> bool {
        if self.disabled || page == 0 || page > self.total_pages() {
            return false;
        }
        tracing::debug!(from = self.current_page(), to = page, "page changed");
        self.current.set_rebuild(page);
        if let Some(ref on_change) = self.on_change {
            on_change(page);
        }
        true
    }

    pub fn previous(&self) -> bool {
        self.has_previous() && self.go_to(self.current_page() - 1)
    }

    pub fn next(&self) -> bool {
        self.has_next() && self.go_to(self.current_page() + 1)
    }

    pub fn view(&self) -> PaginationView {
        let current = self.current_page();
        let nav_variant = |b: Button| {
            if self.borderless {
                b.variant(ButtonVariant::Text)
            } else {
                b
            }
        };

        let previous = nav_variant(
            button(self.texts.previous_label.as_str())
                .size(self.size)
                .aria_label("Previous page")
                .disabled(self.disabled || !self.has_previous()),
        )
        .view();

        let next = nav_variant(
            button(self.texts.next_label.as_str())
                .size(self.size)
                .aria_label("Next page")
                .disabled(self.disabled || !self.has_next()),
        )
        .view();

        let items = self
            .pages()
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => PageItemView::Page {
                    page,
                    current: page == current,
                    button: button(page.to_string())
                        .variant(if page == current {
                            ButtonVariant::Link
                        } else {
                            ButtonVariant::Text
                        })
                        .size(self.size)
                        .aria_label(format!("Go to page {}", page))
                        .disabled(self.disabled)
                        .view(),
                },
                PageItem::Dots => PageItemView::Ellipsis {
                    text: "•••".to_string(),
                },
            })
            .collect();

        let total = self.show_total.as_ref().map(|show| TotalView {
            text: show(self.total_items, self.item_range()),
            position: self.total_position,
        });

        PaginationView {
            size: self.size,
            disabled: self.disabled,
            total,
            previous,
            items,
            next,
        }
    }
}

/// Create pagination
pub fn pagination(
    total_items: usize,
    items_per_page: usize,
    current: &State<usize>,
) -> Result<Pagination> {
    Pagination::new(total_items, items_per_page, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stc_core::StateScope;
    use super::PageItem::{Dots, Page};

    fn pages(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                Page(n) => n.to_string(),
                Dots => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_page_items_small_total() {
        assert_eq!(pages(&page_items(1, 7, 2)), "1 2 3 4 5 6 7");
        assert!(page_items(1, 0, 2).is_empty());
    }

    #[test]
    fn test_page_items_at_start() {
        assert_eq!(pages(&page_items(1, 20, 2)), "1 2 3 4 5 6 7 … 20");
    }

    #[test]
    fn test_page_items_at_end() {
        assert_eq!(pages(&page_items(20, 20, 2)), "1 … 14 15 16 17 18 19 20");
    }

    #[test]
    fn test_page_items_middle() {
        assert_eq!(pages(&page_items(10, 20, 2)), "1 … 8 9 10 11 12 … 20");
    }

    #[test]
    fn test_page_items_without_dots() {
        assert_eq!(pages(&page_items(4, 8, 2)), "1 2 3 4 5 6 7 8");
    }

    #[test]
    fn test_page_items_dots_hide_pages() {
        assert_eq!(pages(&page_items(1, 8, 2)), "1 2 3 4 5 6 … 8");
        assert_eq!(pages(&page_items(3, 12, 5)), "1 2 3 4 5 6 7 8 9 10 … 12");
    }

    #[test]
    fn test_item_range() {
        assert_eq!(item_range(95, 10, 1), (1, 10));
        assert_eq!(item_range(95, 10, 10), (91, 95));
    }

    #[test]
    fn test_zero_items_per_page_rejected() {
        let scope = StateScope::new();
        let page = scope.use_state(1usize);
        assert_eq!(
            Pagination::new(10, 0, &page).unwrap_err(),
            ComponentError::ZeroItemsPerPage
        );
    }

    #[test]
    fn test_navigation_updates_state() {
        let scope = StateScope::new();
        let page = scope.use_state(1usize);
        let pagination = pagination(30, 10, &page).unwrap();

        assert!(!pagination.previous());
        assert!(pagination.next());
        assert!(pagination.next());
        assert!(!pagination.next());
        assert_eq!(page.get(), 3);
        assert!(!pagination.go_to(4));
        assert!(scope.take_dirty());
    }

    #[test]
    fn test_disabled_blocks_navigation() {
        let scope = StateScope::new();
        let page = scope.use_state(2usize);
        let pagination = pagination(30, 10, &page).unwrap().disabled(true);

        assert!(!pagination.go_to(1));
        let view = pagination.view();
        assert!(view.previous.disabled);
        assert!(view.next.disabled);
    }
}
