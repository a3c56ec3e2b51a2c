use std::{
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};

use clap::{Parser, Subcommand};

use crate::{
    common::{
        config::{DEFAULT_RESOURCE_DIR, StoreConfig, UnknownDepartmentPolicy},
        error::AppError,
        event::StockCommand,
        money::Money,
    },
    domain::ledger::InventoryLedger,
    io::{store::CsvRecordStore, writer},
    worker::{
        low_stock::{LowStockMonitor, LowStockWarning, is_low_stock},
        notifier::ChangeNotifier,
        processor::Processor,
    },
};

/// Stock control for the primary and partner catalogs
#[derive(Parser, Debug)]
#[command(name = "stock_control")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding the catalog and sales CSV files
    #[arg(short, long, default_value = DEFAULT_RESOURCE_DIR)]
    pub resources: PathBuf,

    /// How partner rows with an unknown department id are merged
    #[arg(long, value_enum, default_value_t = UnknownDepartmentPolicy::PassThrough)]
    pub unknown_departments: UnknownDepartmentPolicy,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the merged stock table
    Stock,
    /// Print every recorded sale
    Sales,
    /// Print items below the low-stock threshold
    LowStock,
    /// Add a stock item and save the stock file
    Buy {
        #[arg(long)]
        code: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Unit price, e.g. 10.99
        #[arg(long, value_parser = parse_price)]
        price: Money,
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(i32::MAX)))]
        quantity: u32,
    },
    /// Sell from the first item with the given code and save the stock file
    Sell {
        #[arg(long)]
        code: String,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },
}

fn parse_price(s: &str) -> Result<Money, String> {
    let price: Money = s.parse().map_err(|e| format!("invalid price '{s}': {e}"))?;
    if price < Money::zero() {
        return Err(format!("invalid price '{s}': must not be negative"));
    }
    // The stock file holds pounds as a 32-bit integer.
    if price.pounds() > i64::from(i32::MAX) {
        return Err(format!("invalid price '{s}': too large"));
    }
    Ok(price)
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            print!("{e}");
            return Ok(());
        }
        Err(e) => return Err(AppError::Parse(e.to_string())),
    };
    let config =
        StoreConfig::new(&args.resources).with_unknown_departments(args.unknown_departments);

    let (mut ledger, load_errors) =
        InventoryLedger::initialize(CsvRecordStore::new(config), ChangeNotifier::new())
            .into_parts();
    if !load_errors.is_empty() {
        log::warn!("continuing with {} load error(s)", load_errors.len());
    }
    ledger
        .notifier_mut()
        .subscribe(LowStockMonitor::new(|warning: LowStockWarning| {
            eprintln!("{warning}");
        }));

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut processor = Processor::new();

    match args.command {
        Command::Stock => writer::write_stock_table(&mut out, ledger.items())?,
        Command::Sales => {
            let records = ledger.current_sales_log().value;
            writer::write_sales_table(&mut out, &records)?;
        }
        Command::LowStock => {
            let low: Vec<_> = ledger
                .items()
                .iter()
                .filter(|item| is_low_stock(item))
                .cloned()
                .collect();
            writer::write_stock_table(&mut out, &low)?;
        }
        Command::Buy {
            code,
            title,
            description,
            price,
            quantity,
        } => {
            let command = StockCommand::Buy {
                code,
                title,
                description,
                price,
                quantity,
            };
            processor.process(&mut ledger, command)?;
            writer::write_stock_table(&mut out, ledger.items())?;
        }
        Command::Sell { code, quantity } => {
            processor.process(&mut ledger, StockCommand::Sell { code, quantity })?;
            writer::write_stock_table(&mut out, ledger.items())?;
        }
    }

    out.flush()?;
    Ok(())
}
