//! Sort Options

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::products::Product;

/// Ordering applied to catalog listings.
pub type Comparator = fn(&Product, &Product) -> Ordering;

/// Catalog sort options, in the order they appear in the sort menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum SortOption {
    /// Most popular first (by rating)
    #[default]
    Popular,

    /// Cheapest first
    PriceAsc,

    /// Most expensive first
    PriceDesc,

    /// Newest first
    New,

    /// Biggest discount first
    Discount,

    /// Best rated first
    Rating,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::Popular,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::New,
        SortOption::Discount,
        SortOption::Rating,
    ];

    /// Menu label.
    pub const fn title(self) -> &'static str {
        match self {
            SortOption::Popular => "Сначала популярные",
            SortOption::PriceAsc => "Сначала недорогие",
            SortOption::PriceDesc => "Сначала дорогие",
            SortOption::New => "По новинкам",
            SortOption::Discount => "По скидке (%)",
            SortOption::Rating => "Сначала с лучшей оценкой",
        }
    }

    /// Comparator implementing this option.
    ///
    /// Callers must use a stable sort; products with equal keys keep their
    /// incoming order.
    pub const fn comparator(self) -> Comparator {
        match self {
            // Popularity is ranked by rating until real sales data exists.
            SortOption::Popular | SortOption::Rating => by_rating_desc,
            SortOption::PriceAsc => by_price_asc,
            SortOption::PriceDesc => by_price_desc,
            SortOption::New => by_created_at_desc,
            SortOption::Discount => by_discount_desc,
        }
    }
}

fn by_rating_desc(a: &Product, b: &Product) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn by_price_asc(a: &Product, b: &Product) -> Ordering {
    a.price_rub.cmp(&b.price_rub)
}

fn by_price_desc(a: &Product, b: &Product) -> Ordering {
    b.price_rub.cmp(&a.price_rub)
}

fn by_created_at_desc(a: &Product, b: &Product) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

fn by_discount_desc(a: &Product, b: &Product) -> Ordering {
    b.discount_percent.cmp(&a.discount_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::test_support::product;

    #[test]
    fn default_is_popular() {
        assert_eq!(SortOption::default(), SortOption::Popular);
    }

    #[test]
    fn all_lists_each_option_once() {
        for option in SortOption::ALL {
            let count = SortOption::ALL.iter().filter(|o| **o == option).count();

            assert_eq!(count, 1, "{option:?} should appear once");
        }
    }

    #[test]
    fn titles_match_menu() {
        assert_eq!(SortOption::PriceAsc.title(), "Сначала недорогие");
        assert_eq!(SortOption::Discount.title(), "По скидке (%)");
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!(
            SortOption::from_str("price-desc", true),
            Ok(SortOption::PriceDesc)
        );
        assert!(SortOption::from_str("cheapest", true).is_err());
    }

    #[test]
    fn rating_comparator_puts_higher_first() {
        let low = product(1, "A", 100, 4.0);
        let high = product(2, "B", 50, 4.5);

        assert_eq!(SortOption::Rating.comparator()(&high, &low), Ordering::Less);
        assert_eq!(
            SortOption::Popular.comparator()(&low, &low),
            Ordering::Equal
        );
    }
}
