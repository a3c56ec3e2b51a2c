use std::fmt;

use crate::common::money::Money;

pub const MAX_TITLE_CHARS: usize = 120;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// A line of the primary catalog.
///
/// Only the quantity changes after construction, and it never goes below zero:
/// [`StockItem::set_quantity_in_stock`] ignores negative values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockItem {
    product_code: String,
    title: String,
    description: String,
    unit_price_pounds: i64,
    unit_price_pence: i64,
    quantity_in_stock: u32,
}

impl StockItem {
    pub fn new(
        product_code: impl Into<String>,
        title: &str,
        description: &str,
        unit_price_pounds: i64,
        unit_price_pence: i64,
        quantity_in_stock: u32,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            title: limit_chars(title, MAX_TITLE_CHARS),
            description: limit_chars(description, MAX_DESCRIPTION_CHARS),
            unit_price_pounds,
            unit_price_pence,
            quantity_in_stock,
        }
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_price_pounds(&self) -> i64 {
        self.unit_price_pounds
    }

    pub fn unit_price_pence(&self) -> i64 {
        self.unit_price_pence
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn unit_price(&self) -> Money {
        Money::from_parts(self.unit_price_pounds, self.unit_price_pence)
    }

    pub fn total_stock_value(&self) -> Money {
        self.unit_price() * i64::from(self.quantity_in_stock)
    }

    /// Replaces the quantity. Negative (or unrepresentable) values are ignored and
    /// `false` is returned; the item is left untouched.
    pub fn set_quantity_in_stock(&mut self, new_quantity: i64) -> bool {
        match u32::try_from(new_quantity) {
            Ok(q) => {
                self.quantity_in_stock = q;
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Display for StockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} - {} - UNIT PRICE: £{} - QTY: {}",
            self.product_code,
            self.title,
            self.description,
            self.unit_price(),
            self.quantity_in_stock
        )
    }
}

// Cut text is trimmed; text already within the limit is kept verbatim.
fn limit_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() > max_chars {
        input.chars().take(max_chars).collect::<String>().trim().to_string()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StockItem {
        StockItem::new("123", "TestProduct", "Test Description", 10, 99, 50)
    }

    #[test]
    fn accessors_return_constructed_values() {
        let item = sample();
        assert_eq!(item.product_code(), "123");
        assert_eq!(item.title(), "TestProduct");
        assert_eq!(item.description(), "Test Description");
        assert_eq!(item.unit_price_pounds(), 10);
        assert_eq!(item.unit_price_pence(), 99);
        assert_eq!(item.quantity_in_stock(), 50);
        assert_eq!(item.unit_price(), Money::new(1099));
    }

    #[test]
    fn display_matches_catalog_listing() {
        assert_eq!(
            sample().to_string(),
            "123-TestProduct - Test Description - UNIT PRICE: £10.99 - QTY: 50"
        );
    }

    #[test]
    fn display_pads_pence_to_two_digits() {
        let item = StockItem::new("CYC-1", "Bell", "Loud", 4, 5, 3);
        assert_eq!(item.to_string(), "CYC-1-Bell - Loud - UNIT PRICE: £4.05 - QTY: 3");
    }

    #[test]
    fn long_title_and_description_are_cut_and_trimmed() {
        let title = format!("{} tail", "x".repeat(118));
        let description = "d".repeat(600);
        let item = StockItem::new("C", &title, &description, 1, 0, 1);

        // 118 x's, a space, then one char of "tail": the cut leaves "x..x t".
        assert_eq!(item.title().chars().count(), 120);
        assert_eq!(item.description().chars().count(), 500);

        let padded = format!("{}{}", "y".repeat(119), "  more");
        let item = StockItem::new("C", &padded, "", 1, 0, 1);
        assert_eq!(item.title(), "y".repeat(119));
    }

    #[test]
    fn short_text_is_kept_verbatim() {
        let item = StockItem::new("C", " padded ", "", 1, 0, 1);
        assert_eq!(item.title(), " padded ");
    }

    #[test]
    fn set_quantity_accepts_zero_and_positive() {
        let mut item = sample();
        assert!(item.set_quantity_in_stock(0));
        assert_eq!(item.quantity_in_stock(), 0);
        assert!(item.set_quantity_in_stock(7));
        assert_eq!(item.quantity_in_stock(), 7);
    }

    #[test]
    fn negative_quantity_is_rejected_and_value_is_stable() {
        let mut item = sample();
        let before = item.total_stock_value();

        assert!(!item.set_quantity_in_stock(-1));
        assert_eq!(item.quantity_in_stock(), 50);
        assert_eq!(item.total_stock_value(), before);
        assert_eq!(before, Money::new(50 * 1099));
    }

    #[test]
    fn total_stock_value_tracks_quantity() {
        let mut item = sample();
        item.set_quantity_in_stock(3);
        assert_eq!(item.total_stock_value(), Money::new(3 * 1099));
    }
}
