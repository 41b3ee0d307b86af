//! Catalog Query
//!
//! Search and sort over a product listing. Both steps are pure: the input slice
//! is never touched and identical inputs always give identical output.

use crate::{
    catalog::sort::SortOption,
    products::{CategoryId, Product},
};

/// Products to display for a search query and sort option.
///
/// Filters with [`filter_by_title`], then applies the option's comparator with a
/// stable sort.
pub fn visible_products(products: &[Product], query: &str, sort: SortOption) -> Vec<Product> {
    let mut visible = filter_by_title(products, query);

    visible.sort_by(sort.comparator());

    visible
}

/// Products whose title contains `query`, ignoring case.
///
/// The query is trimmed first; a blank query keeps every product. Matching is a
/// plain substring test on lowercased text, with no tokenisation.
pub fn filter_by_title(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim();

    if query.is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Products in a category, or all of them for `None`.
pub fn filter_by_category(products: &[Product], category: Option<CategoryId>) -> Vec<Product> {
    match category {
        None => products.to_vec(),
        Some(category) => products
            .iter()
            .filter(|product| product.category_id == category)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use super::*;
    use crate::{discounts::DiscountPercent, products::test_support::product};

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    fn mixed() -> TestResult<Vec<Product>> {
        let mut a = product(1, "Смартфон Pixel 8", 300, 4.5);
        a.discount_percent = DiscountPercent::new(10)?;
        a.created_at = Timestamp::from_second(300)?;

        let mut b = product(2, "Ноутбук ASUS", 100, 4.5);
        b.discount_percent = DiscountPercent::new(20)?;
        b.created_at = Timestamp::from_second(100)?;

        let mut c = product(3, "Наушники Sony", 200, 4.9);
        c.discount_percent = DiscountPercent::new(10)?;
        c.created_at = Timestamp::from_second(200)?;

        let mut d = product(4, "Телевизор LG", 100, 4.4);
        d.created_at = Timestamp::from_second(300)?;

        Ok(vec![a, b, c, d])
    }

    #[test]
    fn price_asc_and_rating_scenario() {
        let products = vec![product(1, "A", 100, 4.0), product(2, "B", 50, 4.5)];

        assert_eq!(
            ids(&visible_products(&products, "", SortOption::PriceAsc)),
            vec![2, 1]
        );
        assert_eq!(
            ids(&visible_products(&products, "", SortOption::Rating)),
            vec![2, 1]
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let products = vec![
            product(1, "Смартфон Pixel 8", 69_990, 4.8),
            product(2, "Ноутбук ASUS", 55_990, 4.4),
        ];

        assert_eq!(
            ids(&visible_products(&products, "ноут", SortOption::Popular)),
            vec![2]
        );
        assert_eq!(
            ids(&visible_products(&products, "  PIXEL ", SortOption::Popular)),
            vec![1]
        );
    }

    #[test]
    fn blank_query_keeps_everything() -> TestResult {
        let products = mixed()?;

        for sort in SortOption::ALL {
            let mut visible = ids(&visible_products(&products, "   ", sort));
            visible.sort_unstable();

            assert_eq!(visible, vec![1, 2, 3, 4], "{sort:?} should be a permutation");
        }

        Ok(())
    }

    #[test]
    fn unmatched_query_is_empty() -> TestResult {
        assert!(visible_products(&mixed()?, "холодильник", SortOption::New).is_empty());
        assert!(visible_products(&[], "", SortOption::New).is_empty());

        Ok(())
    }

    #[test]
    fn each_option_orders_with_stable_ties() -> TestResult {
        let products = mixed()?;

        let cases = [
            (SortOption::Popular, vec![3, 1, 2, 4]),
            (SortOption::Rating, vec![3, 1, 2, 4]),
            (SortOption::PriceAsc, vec![2, 4, 3, 1]),
            (SortOption::PriceDesc, vec![1, 3, 2, 4]),
            (SortOption::New, vec![1, 4, 3, 2]),
            (SortOption::Discount, vec![2, 1, 3, 4]),
        ];

        for (sort, expected) in cases {
            assert_eq!(
                ids(&visible_products(&products, "", sort)),
                expected,
                "{sort:?}"
            );
        }

        Ok(())
    }

    #[test]
    fn sorting_is_idempotent() -> TestResult {
        let products = mixed()?;

        for sort in SortOption::ALL {
            let once = visible_products(&products, "", sort);
            let twice = visible_products(&once, "", sort);

            assert_eq!(ids(&once), ids(&twice), "{sort:?}");
        }

        Ok(())
    }

    #[test]
    fn input_is_left_untouched() -> TestResult {
        let products = mixed()?;
        let before = ids(&products);

        let _visible = visible_products(&products, "", SortOption::PriceAsc);

        assert_eq!(ids(&products), before);

        Ok(())
    }

    #[test]
    fn category_filter() -> TestResult {
        let mut products = mixed()?;

        if let Some(last) = products.last_mut() {
            last.category_id = CategoryId::new(4);
        }

        assert_eq!(
            ids(&filter_by_category(&products, Some(CategoryId::new(4)))),
            vec![4]
        );
        assert_eq!(ids(&filter_by_category(&products, None)).len(), 4);
        assert!(filter_by_category(&products, Some(CategoryId::new(5))).is_empty());

        Ok(())
    }
}
