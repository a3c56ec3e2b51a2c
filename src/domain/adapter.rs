//! Maps partner catalog rows into the primary catalog's shape.

use crate::domain::{partner_item::PartnerStockItem, stock_item::StockItem};

pub const PARTNER_CODE_SUFFIX: &str = "MSM";
/// Rendered in place of a prefix for department ids outside 1..=3.
pub const MISSING_PREFIX: &str = "null";

pub fn derive_prefix(department_id: i64) -> Option<&'static str> {
    match department_id {
        1 => Some("RUN"),
        2 => Some("SWM"),
        3 => Some("CYC"),
        _ => None,
    }
}

/// `PREFIX-code-MSM`, the code a partner item is known by in the merged list.
pub fn derive_product_code(item: &PartnerStockItem) -> String {
    let prefix = derive_prefix(item.department_id()).unwrap_or(MISSING_PREFIX);
    format!("{prefix}-{}-{PARTNER_CODE_SUFFIX}", item.code())
}

pub fn has_known_department(item: &PartnerStockItem) -> bool {
    derive_prefix(item.department_id()).is_some()
}

pub fn to_stock_item(item: &PartnerStockItem) -> StockItem {
    let price = item.unit_price();
    StockItem::new(
        derive_product_code(item),
        &item.name(),
        &item.description(),
        price.pounds(),
        price.pence(),
        item.quantity_in_stock(),
    )
}
