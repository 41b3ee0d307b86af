//! Product Repository

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{
    fixtures::{Fixture, FixtureError},
    products::{Category, CategoryId, Product, ProductId},
};

/// Source of catalog data.
///
/// Lookups by id return `None` for unknown ids; callers show an empty or "not
/// found" state rather than failing.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository {
    /// All products, in catalog order.
    fn products(&self) -> Arc<[Product]>;

    /// All categories, in catalog order.
    fn categories(&self) -> Arc<[Category]>;

    /// A single product.
    fn product(&self, id: ProductId) -> Option<Product>;

    /// A single category.
    fn category(&self, id: CategoryId) -> Option<Category>;
}

/// Repository over a fixed, in-memory catalog.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<[Product]>,
    categories: Arc<[Category]>,
    product_index: FxHashMap<ProductId, usize>,
    category_index: FxHashMap<CategoryId, usize>,
}

impl InMemoryProductRepository {
    /// Build a repository from categories and products.
    ///
    /// If an id appears more than once, lookups return the first occurrence.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let mut product_index = FxHashMap::default();
        let mut category_index = FxHashMap::default();

        for (idx, product) in products.iter().enumerate() {
            product_index.entry(product.id).or_insert(idx);
        }

        for (idx, category) in categories.iter().enumerate() {
            category_index.entry(category.id).or_insert(idx);
        }

        Self {
            products: Arc::from(products),
            categories: Arc::from(categories),
            product_index,
            category_index,
        }
    }

    /// Repository over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the built-in catalog fails validation.
    pub fn builtin() -> Result<Self, FixtureError> {
        Ok(Fixture::builtin()?.into())
    }
}

impl From<Fixture> for InMemoryProductRepository {
    fn from(fixture: Fixture) -> Self {
        let (categories, products) = fixture.into_parts();

        Self::new(categories, products)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn products(&self) -> Arc<[Product]> {
        Arc::clone(&self.products)
    }

    fn categories(&self) -> Arc<[Category]> {
        Arc::clone(&self.categories)
    }

    fn product(&self, id: ProductId) -> Option<Product> {
        self.product_index
            .get(&id)
            .and_then(|&idx| self.products.get(idx))
            .cloned()
    }

    fn category(&self, id: CategoryId) -> Option<Category> {
        self.category_index
            .get(&id)
            .and_then(|&idx| self.categories.get(idx))
            .cloned()
    }
}
