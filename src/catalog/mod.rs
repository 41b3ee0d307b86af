//! Catalog

pub mod query;
pub mod sort;
pub mod view;

pub use query::{filter_by_category, filter_by_title, visible_products};
pub use sort::{Comparator, SortOption};
pub use view::CatalogView;
