//! Storefront Session
//!
//! One shopping session: a catalog source, the cart, and the listing the user
//! is currently looking at.

use std::sync::Arc;

use tracing::debug;

use crate::{
    cart::CartLedger,
    catalog::{CatalogView, SortOption, filter_by_category},
    products::{Category, CategoryId, Product, ProductId},
    repository::ProductRepository,
    summary::OrderSummary,
};

/// A product together with its category, if the category exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    /// The product
    pub product: Product,

    /// Its category; `None` when the product points at an unknown category
    pub category: Option<Category>,
}

/// Shopping session
#[derive(Debug)]
pub struct Storefront<R> {
    repository: R,
    cart: CartLedger,
    catalog: CatalogView,
}

impl<R: ProductRepository> Storefront<R> {
    /// Start a session with an empty cart, showing every product.
    pub fn new(repository: R) -> Self {
        let catalog = CatalogView::new(repository.products().to_vec());

        Self {
            repository,
            cart: CartLedger::new(),
            catalog,
        }
    }

    /// The data source.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// All categories.
    pub fn categories(&self) -> Arc<[Category]> {
        self.repository.categories()
    }

    /// Start a fresh listing of every product.
    pub fn home(&mut self) -> &[Product] {
        self.catalog = CatalogView::new(self.repository.products().to_vec());
        self.catalog.visible()
    }

    /// Start a fresh listing limited to one category, or all products for `None`.
    ///
    /// Returns the category title. An unknown category gives an empty listing and
    /// no title.
    pub fn open_category(&mut self, category: Option<CategoryId>) -> Option<String> {
        let products = filter_by_category(&self.repository.products(), category);

        debug!(?category, products = products.len(), "opened category");

        self.catalog = CatalogView::new(products);

        category
            .and_then(|id| self.repository.category(id))
            .map(|category| category.title)
    }

    /// Search the current listing.
    pub fn search(&mut self, text: &str) -> &[Product] {
        self.catalog.update_search_text(text);
        self.catalog.visible()
    }

    /// Re-sort the current listing.
    pub fn sort(&mut self, option: SortOption) -> &[Product] {
        self.catalog.update_sort_option(option);
        self.catalog.visible()
    }

    /// The current listing.
    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    /// Product and category for a details page.
    pub fn product_details(&self, id: ProductId) -> Option<ProductDetails> {
        let product = self.repository.product(id)?;
        let category = self.repository.category(product.category_id);

        Some(ProductDetails { product, category })
    }

    /// Put one unit of a product in the cart.
    ///
    /// Returns `false`, leaving the cart untouched, if the product does not exist.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.repository.product(id) else {
            debug!(product_id = %id, "add to cart ignored, unknown product");
            return false;
        };

        self.cart.add(&product);

        true
    }

    /// The cart.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The cart, for quantity changes and subscriptions.
    pub fn cart_mut(&mut self) -> &mut CartLedger {
        &mut self.cart
    }

    /// Number shown on the cart tab: distinct lines, hidden when empty.
    pub fn badge(&self) -> Option<usize> {
        if self.cart.is_empty() {
            None
        } else {
            Some(self.cart.len())
        }
    }

    /// Summary for the cart screen.
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_items(&self.cart.items())
    }
}
