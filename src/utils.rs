//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::{
    catalog::SortOption,
    fixtures::{Fixture, FixtureError},
    logging::LoggingConfig,
    repository::InMemoryProductRepository,
};

/// Arguments for the demo programs
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Catalog fixture to load instead of the built-in one
    #[arg(short, long, env = "STOREFRONT_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Search text applied to the listing
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Sort option
    #[arg(short, long, value_enum, default_value_t = SortOption::Popular)]
    pub sort: SortOption,

    /// Only list products from this category id
    #[arg(short, long)]
    pub category: Option<u32>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl DemoArgs {
    /// Repository over `--fixture`, or the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the catalog cannot be loaded.
    pub fn repository(&self) -> Result<InMemoryProductRepository, FixtureError> {
        let fixture = match &self.fixture {
            Some(path) => Fixture::from_path(path)?,
            None => Fixture::builtin()?,
        };

        Ok(fixture.into())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;
    use crate::{logging::LogFormat, repository::ProductRepository};

    #[test]
    fn defaults() {
        // Env-backed flags are passed explicitly so RUST_LOG and friends cannot leak in.
        let args = DemoArgs::parse_from([
            "catalog",
            "--log-level",
            "info",
            "--log-format",
            "compact",
        ]);

        assert_eq!(args.sort, SortOption::Popular);
        assert!(args.query.is_empty());
        assert_eq!(args.category, None);
        assert_eq!(args.logging.log_level, "info");
        assert_eq!(args.logging.log_format, LogFormat::Compact);
    }

    #[test]
    fn parses_sort_and_category() {
        let args = DemoArgs::parse_from([
            "catalog",
            "-s",
            "price-asc",
            "-c",
            "2",
            "-q",
            "asus",
            "--log-format",
            "compact",
        ]);

        assert_eq!(args.sort, SortOption::PriceAsc);
        assert_eq!(args.category, Some(2));
        assert_eq!(args.query, "asus");
    }

    #[test]
    fn repository_from_fixture_path() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tiny.yml");

        fs::write(
            &path,
            "products:\n  - { id: 1, category_id: 1, title: A, price_rub: 10, created_at: 20250101 }\n",
        )?;

        let path_arg = path.display().to_string();
        let args = DemoArgs::parse_from([
            "catalog",
            "--fixture",
            path_arg.as_str(),
            "--log-format",
            "compact",
        ]);

        assert_eq!(args.repository()?.products().len(), 1);

        Ok(())
    }
}
