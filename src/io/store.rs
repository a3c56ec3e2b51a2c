use std::path::PathBuf;

use crate::{
    common::{config::StoreConfig, error::StoreError, outcome::Outcome},
    domain::{partner_item::PartnerStockItem, sales::SalesRecord, stock_item::StockItem},
    io::{reader, writer},
};

/// The file boundary of the application, bound to one resource directory.
///
/// Every failure is logged here before it is handed back, so callers that only
/// want the best-effort value can ignore the error half.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    config: StoreConfig,
}

impl CsvRecordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn load_stock(&self) -> Outcome<Vec<StockItem>> {
        let path = self.config.stock_path();
        let outcome = reader::load_stock(&path);
        log::debug!("loaded {} stock items from {}", outcome.value.len(), path.display());
        report(outcome)
    }

    pub fn load_partner_stock(&self) -> Outcome<Vec<PartnerStockItem>> {
        let path = self.config.partner_path();
        let outcome = reader::load_partner_stock(&path);
        log::debug!("loaded {} partner items from {}", outcome.value.len(), path.display());
        report(outcome)
    }

    /// Reads every sales file again; nothing is cached between calls.
    pub fn load_sales(&self) -> Outcome<Vec<SalesRecord>> {
        let outcome = reader::load_sales(self.config.sales_dir(), &self.config.sales_prefix);
        report(outcome)
    }

    pub fn append_sale(&self, record: &SalesRecord) -> Result<PathBuf, StoreError> {
        writer::append_sale(self.config.sales_dir(), &self.config.sales_prefix, record)
            .inspect(|path| {
                log::info!(
                    "recorded sale of {} x{} in {}",
                    record.product_code,
                    record.quantity_sold,
                    path.display()
                )
            })
            .inspect_err(|e| log::error!("error writing to sales transactions file: {e}"))
    }

    pub fn write_stock(&self, items: &[StockItem]) -> Result<(), StoreError> {
        let path = self.config.stock_path();
        writer::write_stock(&path, items)
            .inspect(|_| log::debug!("wrote {} stock items to {}", items.len(), path.display()))
            .inspect_err(|e| log::error!("error writing stock file: {e}"))
    }
}

fn report<T>(outcome: Outcome<T>) -> Outcome<T> {
    for err in &outcome.errors {
        log::error!("{err}");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> CsvRecordStore {
        CsvRecordStore::new(StoreConfig::new(dir.path()))
    }

    #[test]
    fn write_then_load_stock_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let items = vec![
            StockItem::new("SWM4564523", "Goggles", "Anti-fog goggles", 10, 99, 20),
            StockItem::new("RUN-234567-MSM", "RunEverywhere", "Great trainers", 88, 50, 0),
        ];

        store.write_stock(&items).unwrap();
        let outcome = store.load_stock();

        assert!(outcome.is_clean());
        assert_eq!(outcome.value, items);
    }

    #[test]
    fn write_stock_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let first = [
            StockItem::new("A", "a", "a", 1, 0, 1),
            StockItem::new("B", "b", "b", 1, 0, 1),
        ];
        store.write_stock(&first).unwrap();
        store.write_stock(&[StockItem::new("C", "c", "c", 1, 0, 1)]).unwrap();

        let text = fs::read_to_string(store.config().stock_path()).unwrap();
        assert_eq!(text, "C,c,c,1,0,1\n");
    }

    #[test]
    fn sales_in_same_second_share_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let first = SalesRecord::new("2024-03-09 12:05:07", "A", 1, 2, 50);
        let second = SalesRecord::new("2024-03-09 12:05:07", "B", 3, 1, 0);
        let later = SalesRecord::new("2024-03-09 12:05:08", "C", 1, 1, 0);

        let p1 = store.append_sale(&first).unwrap();
        let p2 = store.append_sale(&second).unwrap();
        let p3 = store.append_sale(&later).unwrap();

        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
        assert_eq!(
            fs::read_to_string(&p1).unwrap(),
            "2024-03-09 12:05:07,A,1,2,50\n2024-03-09 12:05:07,B,3,1,0\n"
        );
    }

    #[test]
    fn load_sales_concatenates_only_prefixed_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append_sale(&SalesRecord::new("2024-03-09 12:05:07", "A", 1, 2, 50)).unwrap();
        store.append_sale(&SalesRecord::new("2024-03-09 12:05:07", "B", 2, 1, 0)).unwrap();
        store.append_sale(&SalesRecord::new("2024-03-10 09:00:00", "C", 4, 1, 0)).unwrap();
        fs::write(dir.path().join("notes.csv"), "not,a,sale\n").unwrap();
        store.write_stock(&[StockItem::new("A", "a", "a", 1, 0, 1)]).unwrap();

        let outcome = store.load_sales();
        assert!(outcome.is_clean(), "{:?}", outcome.errors);

        let mut codes: Vec<&str> = outcome.value.iter().map(|r| r.product_code.as_str()).collect();
        // File order is unspecified, row order within a file is not.
        let a = codes.iter().position(|c| *c == "A").unwrap();
        let b = codes.iter().position(|c| *c == "B").unwrap();
        assert!(a < b);
        codes.sort_unstable();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn bad_sales_file_keeps_prefix_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            dir.path().join("SalesTransactions_1.csv"),
            "2024-03-09 12:05:07,A,1,2,50\n2024-03-09 12:05:07,B,x,1,0\n2024-03-09 12:05:07,C,1,1,0\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("SalesTransactions_2.csv"),
            "2024-03-09 12:06:00,D,1,1,0\n",
        )
        .unwrap();

        let outcome = store.load_sales();
        assert_eq!(outcome.errors.len(), 1);
        let mut codes: Vec<&str> = outcome.value.iter().map(|r| r.product_code.as_str()).collect();
        codes.sort_unstable();
        assert_eq!(codes, vec!["A", "D"]);
    }

    #[test]
    fn missing_catalogs_give_empty_lists_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stock = store.load_stock();
        let partner = store.load_partner_stock();
        assert!(stock.value.is_empty());
        assert!(partner.value.is_empty());
        assert_eq!(stock.errors.len(), 1);
        assert_eq!(partner.errors.len(), 1);
    }

    #[test]
    fn write_into_missing_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::new(StoreConfig::new(dir.path().join("gone")));
        let err = store.write_stock(&[]).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        let err = store
            .append_sale(&SalesRecord::new("2024-03-09 12:05:07", "A", 1, 1, 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
