use crate::common::money::Money;

/// A user action sent from the front end to the worker for processing.
#[derive(Debug, Clone)]
pub enum StockCommand {
    Buy {
        code: String,
        title: String,
        description: String,
        price: Money,
        quantity: u32,
    },
    Sell {
        code: String,
        quantity: i64,
    },
}
