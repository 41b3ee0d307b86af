//! Discounts

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Errors specific to discount values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// Discount percent is above 100.
    #[error("discount of {0}% is out of range (0-100)")]
    OutOfRange(u32),
}

/// Advertised discount in whole percent points, `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(0);

    /// Validate a discount in percent points.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] for values above 100.
    pub fn new(points: u32) -> Result<Self, DiscountError> {
        match u8::try_from(points) {
            Ok(points) if points <= 100 => Ok(Self(points)),
            _ => Err(DiscountError::OutOfRange(points)),
        }
    }

    /// Percent points.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether any discount applies.
    pub const fn is_discounted(self) -> bool {
        self.0 > 0
    }

    /// The discount as a fraction (10% is `0.1`).
    pub fn as_fraction(self) -> Percentage {
        Percentage::from(Decimal::from(self.0) / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}%", self.0)
    }
}

/// Recover the pre-discount price from a discounted price.
///
/// The result is truncated to whole rubles. There is no meaningful old price for
/// 0% or 100% discounts, so those return `None`.
pub fn price_before_discount(price_rub: u64, discount: DiscountPercent) -> Option<u64> {
    if !discount.is_discounted() || discount.get() >= 100 {
        return None;
    }

    let paid_fraction = Decimal::ONE - discount.as_fraction() * Decimal::ONE;

    Decimal::from(price_rub)
        .checked_div(paid_fraction)?
        .trunc()
        .to_u64()
}
