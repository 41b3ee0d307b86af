//! Order Summary

use std::io;

use rusty_money::{Money, iso::Currency};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::CartItem,
    products::{ProductId, rubles},
};

/// Errors that can occur when rendering a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One cart line as shown in the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// Product id
    pub product_id: ProductId,

    /// Product title
    pub title: String,

    /// Unit price in rubles
    pub price_rub: u64,

    /// Units
    pub qty: u32,

    /// `price_rub * qty`
    pub line_total_rub: u64,
}

/// Order summary for the cart screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    items: Vec<SummaryLine>,
    total_rub: u64,
}

impl OrderSummary {
    /// Summarise cart lines.
    pub fn from_items(items: &[CartItem]) -> Self {
        let items: Vec<SummaryLine> = items
            .iter()
            .map(|item| SummaryLine {
                product_id: item.product().id,
                title: item.product().title.clone(),
                price_rub: item.product().price_rub,
                qty: item.qty(),
                line_total_rub: item.line_total(),
            })
            .collect();

        let total_rub = items
            .iter()
            .map(|line| line.line_total_rub)
            .fold(0, u64::saturating_add);

        Self { items, total_rub }
    }

    /// Summary lines in cart order.
    pub fn lines(&self) -> &[SummaryLine] {
        &self.items
    }

    /// Grand total in rubles.
    pub fn total_rub(&self) -> u64 {
        self.total_rub
    }

    /// Grand total as money.
    pub fn total(&self) -> Money<'static, Currency> {
        rubles(self.total_rub)
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Check if the summary has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the summary as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Товар", "Цена", "Кол-во", "Сумма"]);

        for (idx, line) in self.items.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.title.clone(),
                rubles(line.price_rub).to_string(),
                line.qty.to_string(),
                rubles(line.line_total_rub).to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;
        writeln!(
            out,
            " Товаров: {} ({} шт.)  Итого: {}",
            self.line_count(),
            self.unit_count(),
            self.total()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{cart::CartLedger, products::test_support::product};

    fn cart() -> CartLedger {
        let pixel = product(1, "Смартфон Pixel 8", 69_990, 4.8);
        let mut cart = CartLedger::new();

        cart.add(&pixel);
        cart.add(&pixel);
        cart.add(&product(2, "Наушники Sony", 34_990, 4.9));

        cart
    }

    #[test]
    fn summarises_lines_and_totals() {
        let cart = cart();
        let summary = OrderSummary::from_items(&cart.items());

        assert_eq!(summary.line_count(), 2);
        assert_eq!(summary.unit_count(), 3);
        assert_eq!(summary.total_rub(), cart.total());
        assert_eq!(
            summary.lines().first().map(|line| line.line_total_rub),
            Some(139_980)
        );
    }

    #[test]
    fn empty_cart_serialises_like_cart_stub() -> TestResult {
        let summary = OrderSummary::from_items(&[]);
        let yaml = serde_norway::to_string(&summary)?;

        assert!(summary.is_empty());
        assert!(yaml.contains("items: []"), "unexpected yaml: {yaml}");
        assert!(yaml.contains("total_rub: 0"), "unexpected yaml: {yaml}");

        Ok(())
    }

    #[test]
    fn write_to_renders_every_line_and_total() -> TestResult {
        let summary = OrderSummary::from_items(&cart().items());
        let mut out = Vec::new();

        summary.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Смартфон Pixel 8"), "{rendered}");
        assert!(rendered.contains("Наушники Sony"), "{rendered}");
        assert!(rendered.contains("Товаров: 2 (3 шт.)"), "{rendered}");
        assert!(
            rendered.contains(&summary.total().to_string()),
            "{rendered}"
        );

        Ok(())
    }
}
