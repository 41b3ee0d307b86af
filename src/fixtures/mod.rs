//! Fixtures
//!
//! Catalog data in YAML. The storefront ships with a built-in catalog; other
//! catalogs can be loaded from disk in the same format.

use std::{fs, path::Path};

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    discounts::DiscountError,
    fixtures::{categories::CategoryFixture, products::ProductFixture},
    products::{Category, CategoryId, Product, ProductId},
};

pub mod categories;
pub mod products;

/// The catalog bundled with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../fixtures/catalog.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Product ids must be positive
    #[error("Product id must be positive")]
    InvalidProductId,

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Two categories share an id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    /// Rating outside `0.0..=5.0`
    #[error("Product {product} has invalid rating {rating}")]
    InvalidRating {
        /// Offending product
        product: ProductId,
        /// Rating as written
        rating: f64,
    },

    /// Discount outside `0..=100`
    #[error("Product {product}: {source}")]
    InvalidDiscount {
        /// Offending product
        product: ProductId,
        /// Underlying discount error
        source: DiscountError,
    },

    /// Unparseable or out-of-range creation time
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Catalog document as written in YAML
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    categories: Vec<CategoryFixture>,

    #[serde(default)]
    products: Vec<ProductFixture>,
}

/// Validated catalog data
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Fixture {
    /// The catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML fails validation.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path.as_ref())?;

        Self::from_yaml(&contents)
    }

    /// Parse and validate a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML, duplicate ids, or product values out
    /// of range.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        let mut category_ids = FxHashSet::default();
        let mut categories = Vec::with_capacity(fixture.categories.len());

        for category_fixture in fixture.categories {
            let category = Category::from(category_fixture);

            if !category_ids.insert(category.id) {
                return Err(FixtureError::DuplicateCategory(category.id));
            }

            categories.push(category);
        }

        let mut product_ids = FxHashSet::default();
        let mut products = Vec::with_capacity(fixture.products.len());

        for product_fixture in fixture.products {
            let product = Product::try_from(product_fixture)?;

            if !product_ids.insert(product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }

            if !category_ids.contains(&product.category_id) {
                warn!(
                    product_id = %product.id,
                    category_id = %product.category_id,
                    "product references an undeclared category"
                );
            }

            products.push(product);
        }

        info!(
            products = products.len(),
            categories = categories.len(),
            "loaded catalog fixture"
        );

        Ok(Self {
            categories,
            products,
        })
    }

    /// Categories in fixture order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products in fixture order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Split into categories and products.
    pub fn into_parts(self) -> (Vec<Category>, Vec<Product>) {
        (self.categories, self.products)
    }
}
