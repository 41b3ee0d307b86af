//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartItem, CartLedger, CartObserver, CartSnapshot, Delivery, SubscriptionKey},
    catalog::{CatalogView, SortOption, filter_by_category, visible_products},
    discounts::{DiscountError, DiscountPercent},
    fixtures::{Fixture, FixtureError},
    products::{Category, CategoryId, Product, ProductId},
    repository::{InMemoryProductRepository, ProductRepository},
    session::{ProductDetails, Storefront},
    summary::{OrderSummary, SummaryError},
};
