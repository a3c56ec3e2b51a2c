use crate::{
    common::{error::AppError, money::Money},
    domain::{ledger::InventoryLedger, stock_item::StockItem},
};

pub fn handle(
    ledger: &mut InventoryLedger,
    code: &str,
    title: &str,
    description: &str,
    price: Money,
    quantity: u32,
) -> Result<(), AppError> {
    let item = StockItem::new(
        code,
        title,
        description,
        price.pounds(),
        price.pence(),
        quantity,
    );
    ledger.buy(item);
    ledger.persist_stock()?;
    Ok(())
}
