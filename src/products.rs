//! Products

use std::fmt;

use jiff::Timestamp;
use rusty_money::{Money, iso};
use serde::Serialize;

use crate::discounts::{DiscountPercent, price_before_discount};

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wrap a raw product id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Wrap a raw category id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category id
    pub id: CategoryId,

    /// Display title
    pub title: String,
}

/// Product
///
/// Products are immutable once loaded; identity is [`Product::id`]. The category
/// reference is not checked, so `category_id` may point at a category the data
/// source never declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Owning category (may be dangling)
    pub category_id: CategoryId,

    /// Display title, also the search target
    pub title: String,

    /// Price in whole rubles
    pub price_rub: u64,

    /// Long description
    pub description: String,

    /// Average rating, `0.0..=5.0`
    pub rating: f64,

    /// Advertised discount
    pub discount_percent: DiscountPercent,

    /// When the product was added to the catalog
    pub created_at: Timestamp,

    /// Card image
    pub image_url: Option<String>,

    /// Number of reviews behind [`Product::rating`]
    pub reviews_count: u32,
}

impl Product {
    /// Product price as money.
    pub fn price(&self) -> Money<'static, iso::Currency> {
        rubles(self.price_rub)
    }

    /// The "old" price shown struck through next to a discounted price.
    ///
    /// Returns `None` when the product has no discount or a 100% discount.
    pub fn price_before_discount(&self) -> Option<u64> {
        price_before_discount(self.price_rub, self.discount_percent)
    }
}

/// Whole rubles as money, saturating at `i64::MAX`.
pub fn rubles(amount: u64) -> Money<'static, iso::Currency> {
    Money::from_major(i64::try_from(amount).unwrap_or(i64::MAX), iso::RUB)
}
