//! Category Fixtures

use serde::Deserialize;

use crate::products::{Category, CategoryId};

/// Category fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id
    pub id: u32,

    /// Display title
    pub title: String,
}

impl From<CategoryFixture> for Category {
    fn from(fixture: CategoryFixture) -> Self {
        Category {
            id: CategoryId::new(fixture.id),
            title: fixture.title,
        }
    }
}
