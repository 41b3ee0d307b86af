//! Catalog Example
//!
//! Lists the catalog the way the product list screen shows it.
//!
//! Use `-q` to search by title
//! Use `-s` to pick a sort option (popular, price-asc, price-desc, new, discount, rating)
//! Use `-c` to limit the listing to one category id
//! Use `-f` to load a catalog fixture from disk

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use storefront::{
    logging,
    prelude::*,
    products::rubles,
    utils::DemoArgs,
};
use tabled::{builder::Builder, settings::Style};

/// Catalog Example
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    logging::init(&args.logging)?;

    let mut store = Storefront::new(args.repository()?);

    let title = store.open_category(args.category.map(CategoryId::new));
    store.search(&args.query);
    let visible = store.sort(args.sort);

    let mut builder = Builder::default();

    builder.push_record(["#", "Товар", "Цена", "Было", "Скидка", "Рейтинг", "Отзывы"]);

    for product in visible {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.price().to_string(),
            product
                .price_before_discount()
                .map(|price| rubles(price).to_string())
                .unwrap_or_default(),
            if product.discount_percent.is_discounted() {
                product.discount_percent.to_string()
            } else {
                String::new()
            },
            format!("{:.1}", product.rating),
            product.reviews_count.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(
        handle,
        "{} · {} · {}",
        title.as_deref().unwrap_or("Все товары"),
        store.catalog().search_heading(),
        args.sort.title()
    )?;
    writeln!(handle, "{table}")?;

    Ok(())
}
