use chrono::NaiveDateTime;

use crate::common::money::Money;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One sale as written to (and read back from) a sales transactions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub timestamp: String,
    pub product_code: String,
    pub quantity_sold: i64,
    pub unit_price_pounds: i64,
    pub unit_price_pence: i64,
    total_price: Money,
}

impl SalesRecord {
    /// The total is fixed here as quantity times the full pounds-and-pence price.
    pub fn new(
        timestamp: impl Into<String>,
        product_code: impl Into<String>,
        quantity_sold: i64,
        unit_price_pounds: i64,
        unit_price_pence: i64,
    ) -> Self {
        let unit_price = Money::from_parts(unit_price_pounds, unit_price_pence);
        Self {
            timestamp: timestamp.into(),
            product_code: product_code.into(),
            quantity_sold,
            unit_price_pounds,
            unit_price_pence,
            total_price: unit_price * quantity_sold,
        }
    }

    pub fn at(
        when: NaiveDateTime,
        product_code: impl Into<String>,
        quantity_sold: i64,
        unit_price: Money,
    ) -> Self {
        Self::new(
            format_timestamp(when),
            product_code,
            quantity_sold,
            unit_price.pounds(),
            unit_price.pence(),
        )
    }

    pub fn unit_price(&self) -> Money {
        Money::from_parts(self.unit_price_pounds, self.unit_price_pence)
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Timestamp with whitespace, `:` and `-` removed, as used in file names.
    pub fn compact_timestamp(&self) -> String {
        self.timestamp
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
            .collect()
    }
}

pub fn format_timestamp(when: NaiveDateTime) -> String {
    when.format(TIMESTAMP_FORMAT).to_string()
}
