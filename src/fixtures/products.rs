//! Product Fixtures

use jiff::{Timestamp, tz::TimeZone};
use serde::Deserialize;

use crate::{
    discounts::DiscountPercent,
    fixtures::FixtureError,
    products::{CategoryId, Product, ProductId},
};

/// Largest integer read as a `YYYYMMDD` calendar date rather than epoch millis.
const MAX_CALENDAR_DATE: u64 = 99_999_999;

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id, must be positive
    pub id: u32,

    /// Category id
    pub category_id: u32,

    /// Product title
    pub title: String,

    /// Price in whole rubles
    pub price_rub: u64,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Rating, `0.0..=5.0`
    #[serde(default)]
    pub rating: f64,

    /// Discount percent points
    #[serde(default)]
    pub discount_percent: u32,

    /// Creation time
    pub created_at: CreatedAtFixture,

    /// Image URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Review count
    #[serde(default)]
    pub reviews_count: u32,
}

/// Creation time as written in a fixture.
///
/// Strings are RFC 3339 timestamps. Integers of up to eight digits are
/// `YYYYMMDD` dates at UTC midnight; anything larger is epoch milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatedAtFixture {
    /// Integer date or epoch milliseconds
    Integer(u64),

    /// RFC 3339 timestamp
    Text(String),
}

impl TryFrom<CreatedAtFixture> for Timestamp {
    type Error = FixtureError;

    fn try_from(value: CreatedAtFixture) -> Result<Self, Self::Error> {
        match value {
            CreatedAtFixture::Text(text) => text
                .parse()
                .map_err(|err| FixtureError::InvalidTimestamp(format!("{text}: {err}"))),
            CreatedAtFixture::Integer(date) if date <= MAX_CALENDAR_DATE => calendar_date(date),
            CreatedAtFixture::Integer(millis) => i64::try_from(millis)
                .ok()
                .and_then(|millis| Timestamp::from_millisecond(millis).ok())
                .ok_or_else(|| FixtureError::InvalidTimestamp(millis.to_string())),
        }
    }
}

/// Midnight UTC on a `YYYYMMDD` date.
fn calendar_date(value: u64) -> Result<Timestamp, FixtureError> {
    let invalid = || FixtureError::InvalidTimestamp(value.to_string());

    let year = i16::try_from(value / 10_000).map_err(|_err| invalid())?;
    let month = i8::try_from(value / 100 % 100).map_err(|_err| invalid())?;
    let day = i8::try_from(value % 100).map_err(|_err| invalid())?;

    let date = jiff::civil::Date::new(year, month, day).map_err(|_err| invalid())?;

    date.at(0, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|_err| invalid())
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        if fixture.id == 0 {
            return Err(FixtureError::InvalidProductId);
        }

        let id = ProductId::new(fixture.id);

        if !fixture.rating.is_finite() || !(0.0..=5.0).contains(&fixture.rating) {
            return Err(FixtureError::InvalidRating {
                product: id,
                rating: fixture.rating,
            });
        }

        let discount_percent = DiscountPercent::new(fixture.discount_percent)
            .map_err(|source| FixtureError::InvalidDiscount { product: id, source })?;

        Ok(Product {
            id,
            category_id: CategoryId::new(fixture.category_id),
            title: fixture.title,
            price_rub: fixture.price_rub,
            description: fixture.description,
            rating: fixture.rating,
            discount_percent,
            created_at: fixture.created_at.try_into()?,
            image_url: fixture.image_url,
            reviews_count: fixture.reviews_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::discounts::DiscountError;

    fn fixture() -> ProductFixture {
        ProductFixture {
            id: 1,
            category_id: 1,
            title: "Смартфон Pixel 8".to_string(),
            price_rub: 69_990,
            description: String::new(),
            rating: 4.8,
            discount_percent: 10,
            created_at: CreatedAtFixture::Text("2025-02-08T07:33:20Z".to_string()),
            image_url: None,
            reviews_count: 666,
        }
    }

    #[test]
    fn converts_valid_fixture() -> TestResult {
        let product = Product::try_from(fixture())?;

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.discount_percent.get(), 10);
        assert_eq!(product.created_at.as_millisecond(), 1_739_000_000_000);

        Ok(())
    }

    #[test]
    fn epoch_millis_and_calendar_dates_normalise() -> TestResult {
        let millis = Timestamp::try_from(CreatedAtFixture::Integer(1_739_000_000_000))?;
        let date = Timestamp::try_from(CreatedAtFixture::Integer(20_260_210))?;
        let text = Timestamp::try_from(CreatedAtFixture::Text("2026-02-10T00:00:00Z".into()))?;

        assert_eq!(millis, Timestamp::from_millisecond(1_739_000_000_000)?);
        assert_eq!(date, text);
        assert!(date > millis, "2026 should sort after 2025");

        Ok(())
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let result = Timestamp::try_from(CreatedAtFixture::Integer(20_261_340));

        assert!(matches!(result, Err(FixtureError::InvalidTimestamp(_))));
    }

    #[test]
    fn rejects_unparseable_text() {
        let result = Timestamp::try_from(CreatedAtFixture::Text("yesterday".into()));

        assert!(matches!(result, Err(FixtureError::InvalidTimestamp(_))));
    }

    #[test]
    fn rejects_zero_id() {
        let mut fixture = fixture();
        fixture.id = 0;

        assert!(matches!(
            Product::try_from(fixture),
            Err(FixtureError::InvalidProductId)
        ));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut fixture = fixture();
        fixture.rating = 5.5;

        assert!(matches!(
            Product::try_from(fixture),
            Err(FixtureError::InvalidRating { .. })
        ));
    }

    #[test]
    fn rejects_discount_over_one_hundred() {
        let mut fixture = fixture();
        fixture.discount_percent = 120;

        assert!(matches!(
            Product::try_from(fixture),
            Err(FixtureError::InvalidDiscount {
                source: DiscountError::OutOfRange(120),
                ..
            })
        ));
    }
}
