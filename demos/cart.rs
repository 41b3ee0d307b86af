//! Cart Example
//!
//! Runs a scripted shopping session against the catalog and prints the order
//! summary. Cart changes are logged by a subscribed observer; run with
//! `-l debug` to also see the ledger's own events.
//!
//! Use `-q`, `-s` and `-c` to choose which listing products are taken from
//! Use `-f` to load a catalog fixture from disk

use std::io;

use anyhow::Result;
use clap::Parser;
use storefront::{logging, prelude::*, utils::DemoArgs};
use tracing::info;

/// Cart Example
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    logging::init(&args.logging)?;

    let mut store = Storefront::new(args.repository()?);

    store.cart_mut().subscribe(|items: &[CartItem]| {
        let units: u32 = items.iter().map(CartItem::qty).sum();
        info!(lines = items.len(), units, "cart changed");
    });

    store.open_category(args.category.map(CategoryId::new));
    store.search(&args.query);

    let picked: Vec<ProductId> = store
        .sort(args.sort)
        .iter()
        .take(3)
        .map(|product| product.id)
        .collect();

    let Some(&first) = picked.first() else {
        info!("nothing matched, cart stays empty");
        return Ok(());
    };

    for &id in &picked {
        store.add_to_cart(id);
    }

    store.add_to_cart(first);
    store.cart_mut().increment(first);

    if let Some(&last) = picked.last() {
        store.cart_mut().decrement(last);
    }

    info!(badge = ?store.badge(), total = %store.cart().total_money(), "session finished");

    store.order_summary().write_to(io::stdout().lock())?;

    Ok(())
}
