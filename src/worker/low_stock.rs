use std::fmt;

use crate::{domain::stock_item::StockItem, worker::notifier::StockListener};

/// Quantities strictly below this raise a warning.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

pub fn is_low_stock(item: &StockItem) -> bool {
    item.quantity_in_stock() < LOW_STOCK_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockWarning {
    pub product_code: String,
    pub quantity: u32,
}

impl LowStockWarning {
    pub fn for_item(item: &StockItem) -> Option<Self> {
        is_low_stock(item).then(|| Self {
            product_code: item.product_code().to_string(),
            quantity: item.quantity_in_stock(),
        })
    }
}

impl fmt::Display for LowStockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Low stock warning for: {} QTY: {}",
            self.product_code, self.quantity
        )
    }
}

/// Listener that forwards a warning for every changed item that is low on stock.
pub struct LowStockMonitor<F> {
    on_warning: F,
}

impl<F: FnMut(LowStockWarning)> LowStockMonitor<F> {
    pub fn new(on_warning: F) -> Self {
        Self { on_warning }
    }
}

impl<F: FnMut(LowStockWarning)> StockListener for LowStockMonitor<F> {
    fn on_stock_changed(&mut self, item: &StockItem) {
        if let Some(warning) = LowStockWarning::for_item(item) {
            (self.on_warning)(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::notifier::ChangeNotifier;
    use std::{cell::RefCell, rc::Rc};

    fn with_quantity(quantity: u32) -> StockItem {
        StockItem::new("SWM4564523", "Goggles", "Anti-fog", 10, 99, quantity)
    }

    #[test]
    fn threshold_is_strict() {
        assert!(is_low_stock(&with_quantity(0)));
        assert!(is_low_stock(&with_quantity(4)));
        assert!(!is_low_stock(&with_quantity(5)));
        assert!(!is_low_stock(&with_quantity(20)));
    }

    #[test]
    fn warning_message() {
        let warning = LowStockWarning::for_item(&with_quantity(3)).unwrap();
        assert_eq!(warning.to_string(), "Low stock warning for: SWM4564523 QTY: 3");
        assert!(LowStockWarning::for_item(&with_quantity(5)).is_none());
    }

    #[test]
    fn monitor_only_fires_below_threshold() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut bus = ChangeNotifier::new();
        bus.subscribe(LowStockMonitor::new(move |w: LowStockWarning| {
            sink.borrow_mut().push(w)
        }));

        bus.publish(&with_quantity(10));
        bus.publish(&with_quantity(4));
        bus.publish(&with_quantity(5));

        assert_eq!(
            *seen.borrow(),
            vec![LowStockWarning {
                product_code: "SWM4564523".into(),
                quantity: 4
            }]
        );
    }
}
