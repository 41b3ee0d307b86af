//! Catalog View

use tracing::debug;

use crate::{
    catalog::{query::visible_products, sort::SortOption},
    products::Product,
};

/// Heading above an unfiltered listing.
pub const RECOMMENDATIONS_HEADING: &str = "Вам может понравиться";

/// Heading above search results.
pub const SEARCH_RESULTS_HEADING: &str = "Результаты поиска";

/// State behind a product listing screen.
///
/// Holds the source products, the search text and the sort option, and keeps
/// the visible list in step: every update recomputes it.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    source: Vec<Product>,
    search_text: String,
    sort_option: SortOption,
    visible: Vec<Product>,
}

impl CatalogView {
    /// Create a view over a source listing with no search and default sort.
    pub fn new(source: Vec<Product>) -> Self {
        let mut view = Self::default();
        view.set_source_products(source);
        view
    }

    /// Replace the source listing, e.g. when the category changes.
    pub fn set_source_products(&mut self, products: Vec<Product>) {
        self.source = products;
        self.recalculate();
    }

    /// Store new search text.
    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recalculate();
    }

    /// Store a new sort option.
    pub fn update_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
        self.recalculate();
    }

    /// Products to render.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Products before search and sort.
    pub fn source(&self) -> &[Product] {
        &self.source
    }

    /// Current search text, untrimmed.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current sort option.
    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    /// Heading for the listing.
    pub fn search_heading(&self) -> &'static str {
        if self.search_text.trim().is_empty() {
            RECOMMENDATIONS_HEADING
        } else {
            SEARCH_RESULTS_HEADING
        }
    }

    fn recalculate(&mut self) {
        self.visible = visible_products(&self.source, &self.search_text, self.sort_option);

        debug!(
            source = self.source.len(),
            visible = self.visible.len(),
            sort = ?self.sort_option,
            "recalculated catalog view"
        );
    }
}
