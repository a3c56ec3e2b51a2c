use crate::{
    common::{error::AppError, event::StockCommand},
    domain::ledger::InventoryLedger,
    worker::handlers::{buy, sell},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut InventoryLedger,
        command: StockCommand,
    ) -> Result<(), AppError> {
        match command {
            StockCommand::Buy {
                code,
                title,
                description,
                price,
                quantity,
            } => {
                buy::handle(ledger, &code, &title, &description, price, quantity)?;
            }
            StockCommand::Sell { code, quantity } => {
                sell::handle(ledger, &code, quantity)?;
            }
        }
        Ok(())
    }
}
