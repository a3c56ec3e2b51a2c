use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

use csv::StringRecord;

use crate::{
    common::{error::StoreError, money::Money, outcome::Outcome},
    domain::{partner_item::PartnerStockItem, sales::SalesRecord, stock_item::StockItem},
};

const STOCK_COLUMNS: usize = 6;
const PARTNER_COLUMNS: usize = 5;
const SALES_COLUMNS: usize = 5;

/// Builds a reader for the legacy files: no header row, no quoting, and no
/// column-count enforcement (rows are checked one by one instead).
pub fn legacy_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(source)
}

/// Parses `code,title,description,pounds,pence,quantity`.
pub fn parse_stock_record(record: &StringRecord) -> Result<StockItem, String> {
    expect_columns(record, STOCK_COLUMNS)?;
    Ok(StockItem::new(
        &record[0],
        &record[1],
        &record[2],
        parse_int("pounds", &record[3])?,
        parse_int("pence", &record[4])?,
        parse_quantity(&record[5])?,
    ))
}

/// Parses `departmentId,code,nameAndDescription,pricePence,quantity`. Anything
/// other than a digit is dropped from the department column first.
pub fn parse_partner_record(record: &StringRecord) -> Result<PartnerStockItem, String> {
    expect_columns(record, PARTNER_COLUMNS)?;
    let department: String = record[0].chars().filter(char::is_ascii_digit).collect();
    PartnerStockItem::new(
        parse_int("department id", &department)?,
        &record[1],
        &record[2],
        parse_int("price", &record[3])?,
        parse_quantity(&record[4])?,
    )
}

/// Parses `timestamp,productCode,quantitySold,pounds,pence`. A row whose total
/// does not fit in [`Money`] is malformed.
pub fn parse_sales_record(record: &StringRecord) -> Result<SalesRecord, String> {
    expect_columns(record, SALES_COLUMNS)?;
    let quantity = parse_int("quantity sold", &record[2])?;
    let pounds = parse_int("pounds", &record[3])?;
    let pence = parse_int("pence", &record[4])?;
    Money::checked_from_parts(pounds, pence)
        .and_then(|price| price.checked_mul(quantity))
        .ok_or_else(|| format!("total for {quantity} at {pounds}.{pence} is out of range"))?;
    Ok(SalesRecord::new(&record[0], &record[1], quantity, pounds, pence))
}

/// Reads rows until the first failure. Rows parsed before it are kept; the
/// failure is attached to the outcome and nothing after it is read.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use stock_control::io::reader::{legacy_reader, parse_stock_record, read_records};
///
/// let data = "SWM4564523,Goggles,Anti-fog goggles,10,99,20\nBAD,row\n";
/// let mut rdr = legacy_reader(data.as_bytes());
/// let outcome = read_records(&mut rdr, Path::new("inline"), parse_stock_record);
///
/// assert_eq!(outcome.value.len(), 1);
/// assert_eq!(outcome.errors.len(), 1);
/// ```
pub fn read_records<R, T, F>(rdr: &mut csv::Reader<R>, source: &Path, parse: F) -> Outcome<Vec<T>>
where
    R: Read,
    F: Fn(&StringRecord) -> Result<T, String>,
{
    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => return Outcome::clean(rows),
            Ok(true) => match parse(&record) {
                Ok(row) => rows.push(row),
                Err(reason) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    let err = StoreError::MalformedRow {
                        path: source.to_path_buf(),
                        line,
                        reason,
                    };
                    return Outcome::with_error(rows, err);
                }
            },
            Err(e) => return Outcome::with_error(rows, StoreError::csv(source, e)),
        }
    }
}

pub fn load_stock(path: &Path) -> Outcome<Vec<StockItem>> {
    load_file(path, parse_stock_record)
}

pub fn load_partner_stock(path: &Path) -> Outcome<Vec<PartnerStockItem>> {
    load_file(path, parse_partner_record)
}

/// Concatenates every sales file in `dir` whose name starts with `prefix`.
///
/// Rows keep their order within a file, but files come in directory
/// enumeration order, which the platform does not define. A bad file
/// contributes the rows before its first bad row and loading moves on.
pub fn load_sales(dir: &Path, prefix: &str) -> Outcome<Vec<SalesRecord>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => return Outcome::with_error(Vec::new(), StoreError::io(dir, e)),
    };

    let mut outcome = Outcome::clean(Vec::new());
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                outcome.errors.push(StoreError::io(dir, e));
                continue;
            }
        };
        let path = entry.path();
        let is_sales_file = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix));
        if !is_sales_file || !path.is_file() {
            continue;
        }
        let rows = outcome.absorb(load_file(&path, parse_sales_record));
        outcome.value.extend(rows);
    }
    outcome
}

fn load_file<T, F>(path: &Path, parse: F) -> Outcome<Vec<T>>
where
    F: Fn(&StringRecord) -> Result<T, String>,
{
    match File::open(path) {
        Ok(file) => read_records(&mut legacy_reader(file), path, parse),
        Err(e) => Outcome::with_error(Vec::new(), StoreError::io(path, e)),
    }
}

fn expect_columns(record: &StringRecord, expected: usize) -> Result<(), String> {
    if record.len() != expected {
        return Err(format!(
            "expected {expected} columns, found {}",
            record.len()
        ));
    }
    Ok(())
}

// Numeric columns hold 32-bit integers; wider values are malformed.
fn parse_int(field: &str, value: &str) -> Result<i64, String> {
    value
        .parse::<i32>()
        .map(i64::from)
        .map_err(|e| format!("{field} '{value}' is not a 32-bit whole number: {e}"))
}

fn parse_quantity(value: &str) -> Result<u32, String> {
    let quantity = parse_int("quantity", value)?;
    u32::try_from(quantity).map_err(|_| format!("quantity '{value}' is out of range"))
}
