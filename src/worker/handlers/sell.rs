use crate::{common::error::AppError, domain::ledger::InventoryLedger};

/// Sells after the checks the sell form performs, then rewrites the stock file.
pub fn handle(ledger: &mut InventoryLedger, code: &str, quantity: i64) -> Result<(), AppError> {
    let item = ledger
        .find(code)
        .ok_or_else(|| AppError::UnknownProduct(code.to_string()))?;
    let available = item.quantity_in_stock();

    if quantity <= 0 || quantity > i64::from(available) {
        return Err(AppError::InvalidQuantity {
            requested: quantity,
            available,
        });
    }
    if item.unit_price().checked_mul(quantity).is_none() {
        return Err(AppError::TotalOutOfRange {
            code: code.to_string(),
            quantity,
        });
    }

    let (_, errors) = ledger.sell(code, quantity).into_parts();
    // The stock file is rewritten even when the sale line could not be appended.
    let persisted = ledger.persist_stock();
    if let Some(err) = errors.into_iter().next() {
        return Err(err.into());
    }
    persisted?;
    Ok(())
}
