use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    common::error::StoreError,
    domain::{sales::SalesRecord, stock_item::StockItem},
};

/// Row of the stock table printed by the front end.
#[derive(serde::Serialize)]
struct StockRow<'a> {
    #[serde(rename = "Product Code")]
    code: &'a str,
    #[serde(rename = "Product Title")]
    title: &'a str,
    #[serde(rename = "Product Description")]
    description: &'a str,
    #[serde(rename = "Unit Price (Pounds)")]
    pounds: i64,
    #[serde(rename = "Unit Price (Pence)")]
    pence: i64,
    #[serde(rename = "Quantity in Stock")]
    quantity: u32,
}

/// Row of the sales table printed by the front end. Prices use 2 decimal places.
#[derive(serde::Serialize)]
struct SalesRow<'a> {
    #[serde(rename = "Date and Time")]
    timestamp: &'a str,
    #[serde(rename = "Product Code")]
    code: &'a str,
    #[serde(rename = "Quantity Sold")]
    quantity: i64,
    #[serde(rename = "Unit Price")]
    unit_price: String,
    #[serde(rename = "Total Price")]
    total_price: String,
}

// Legacy files are written exactly as they are read: no header and no quoting.
fn legacy_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer)
}

/// Writes stock rows in the primary catalog format.
pub fn write_stock_rows<W: Write>(writer: W, items: &[StockItem]) -> Result<(), csv::Error> {
    let mut wtr = legacy_writer(writer);
    for item in items {
        wtr.write_record([
            item.product_code().to_string(),
            item.title().to_string(),
            item.description().to_string(),
            item.unit_price_pounds().to_string(),
            item.unit_price_pence().to_string(),
            item.quantity_in_stock().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Overwrites `path` with every item, one per line.
pub fn write_stock(path: &Path, items: &[StockItem]) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    write_stock_rows(file, items).map_err(|e| StoreError::csv(path, e))
}

/// Path of the sales file a record is appended to: one file per second.
pub fn sales_file_path(dir: &Path, prefix: &str, record: &SalesRecord) -> PathBuf {
    dir.join(format!("{prefix}{}.csv", record.compact_timestamp()))
}

/// Appends one line to the sales file for the record's timestamp, creating the
/// file when it does not exist yet. Returns the path written to.
pub fn append_sale(dir: &Path, prefix: &str, record: &SalesRecord) -> Result<PathBuf, StoreError> {
    let path = sales_file_path(dir, prefix, record);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| StoreError::io(&path, e))?;

    let mut wtr = legacy_writer(file);
    wtr.write_record([
        record.timestamp.clone(),
        record.product_code.clone(),
        record.quantity_sold.to_string(),
        record.unit_price_pounds.to_string(),
        record.unit_price_pence.to_string(),
    ])
    .map_err(|e| StoreError::csv(&path, e))?;
    wtr.flush().map_err(|e| StoreError::io(&path, e))?;
    Ok(path)
}

/// Writes the stock table with a header row, in ledger order.
///
/// # Examples
///
/// ```
/// use stock_control::domain::stock_item::StockItem;
/// use stock_control::io::writer::write_stock_table;
///
/// let items = vec![StockItem::new("SWM4564523", "Goggles", "Anti-fog", 10, 99, 20)];
/// let mut out = Vec::new();
/// write_stock_table(&mut out, &items).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("Product Code,Product Title,"));
/// assert!(s.contains("\nSWM4564523,Goggles,Anti-fog,10,99,20\n"));
/// ```
pub fn write_stock_table<W: Write>(writer: W, items: &[StockItem]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for item in items {
        wtr.serialize(StockRow {
            code: item.product_code(),
            title: item.title(),
            description: item.description(),
            pounds: item.unit_price_pounds(),
            pence: item.unit_price_pence(),
            quantity: item.quantity_in_stock(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_sales_table<W: Write>(writer: W, records: &[SalesRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for rec in records {
        wtr.serialize(SalesRow {
            timestamp: &rec.timestamp,
            code: &rec.product_code,
            quantity: rec.quantity_sold,
            unit_price: rec.unit_price().to_string_2dp(),
            total_price: rec.total_price().to_string_2dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::{legacy_reader, parse_stock_record, read_records};

    fn items() -> Vec<StockItem> {
        vec![
            StockItem::new("SWM4564523", "Goggles", "Anti-fog goggles", 10, 99, 20),
            StockItem::new("CYC-100200-MSM", "Helmet", "", 45, 0, 2),
        ]
    }

    #[test]
    fn stock_rows_have_no_header_and_no_quotes() {
        let mut out = Vec::new();
        let quoted = vec![StockItem::new("Q1", "The \"Pro\" Bag", "d", 1, 5, 1)];
        write_stock_rows(&mut out, &quoted).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Q1,The \"Pro\" Bag,d,1,5,1\n");
    }

    #[test]
    fn stock_rows_read_back_equal() {
        let mut out = Vec::new();
        write_stock_rows(&mut out, &items()).unwrap();

        let mut rdr = legacy_reader(out.as_slice());
        let outcome = read_records(&mut rdr, Path::new("mem"), parse_stock_record);
        assert!(outcome.is_clean());
        assert_eq!(outcome.value, items());
    }

    #[test]
    fn stock_table_has_header_and_rows_in_order() {
        let mut out = Vec::new();
        write_stock_table(&mut out, &items()).unwrap();
        let s = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(
            lines[0],
            "Product Code,Product Title,Product Description,Unit Price (Pounds),Unit Price (Pence),Quantity in Stock"
        );
        assert_eq!(lines[1], "SWM4564523,Goggles,Anti-fog goggles,10,99,20");
        assert_eq!(lines[2], "CYC-100200-MSM,Helmet,,45,0,2");
    }

    #[test]
    fn sales_table_formats_prices_2dp() {
        let records = vec![SalesRecord::new("2024-03-09 12:05:07", "SWM4564523", 5, 10, 99)];
        let mut out = Vec::new();
        write_sales_table(&mut out, &records).unwrap();
        let s = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(
            lines[0],
            "Date and Time,Product Code,Quantity Sold,Unit Price,Total Price"
        );
        assert_eq!(lines[1], "2024-03-09 12:05:07,SWM4564523,5,10.99,54.95");
    }

    #[test]
    fn sales_file_name_encodes_second() {
        let rec = SalesRecord::new("2024-03-09 12:05:07", "X", 1, 1, 0);
        let path = sales_file_path(Path::new("/res"), "SalesTransactions_", &rec);
        assert_eq!(
            path,
            PathBuf::from("/res/SalesTransactions_20240309120507.csv")
        );
    }
}
