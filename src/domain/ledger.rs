use chrono::{Local, NaiveDateTime};

use crate::{
    common::{config::UnknownDepartmentPolicy, error::StoreError, outcome::Outcome},
    domain::{
        adapter, partner_item::PartnerStockItem, sales::SalesRecord, stock_item::StockItem,
    },
    io::store::CsvRecordStore,
    worker::notifier::ChangeNotifier,
};

/// The merged stock list plus access to the sales log on disk.
#[derive(Debug)]
pub struct InventoryLedger {
    items: Vec<StockItem>,
    store: CsvRecordStore,
    notifier: ChangeNotifier,
}

impl InventoryLedger {
    /// Loads both catalogs through `store` and merges them. Load failures are
    /// collected in the outcome; the ledger holds whatever could be read.
    pub fn initialize(store: CsvRecordStore, notifier: ChangeNotifier) -> Outcome<Self> {
        let mut outcome = Outcome::clean(());
        let primary = outcome.absorb(store.load_stock());
        let partner = outcome.absorb(store.load_partner_stock());
        let ledger = Self::from_parts(store, notifier, primary, partner);
        log::info!("ledger initialized with {} items", ledger.items.len());
        Outcome {
            value: ledger,
            errors: outcome.errors,
        }
    }

    /// Primary items keep file order; each partner item follows unless its
    /// derived code is already in the list being built.
    pub fn from_parts(
        store: CsvRecordStore,
        notifier: ChangeNotifier,
        primary: Vec<StockItem>,
        partner: Vec<PartnerStockItem>,
    ) -> Self {
        let policy = store.config().unknown_departments;
        let mut items = primary;
        for partner_item in &partner {
            if policy == UnknownDepartmentPolicy::Reject
                && !adapter::has_known_department(partner_item)
            {
                log::warn!(
                    "dropping partner item {} with unknown department {}",
                    partner_item.code(),
                    partner_item.department_id()
                );
                continue;
            }
            let code = adapter::derive_product_code(partner_item);
            if items.iter().any(|item| item.product_code() == code) {
                log::debug!("partner item {code} already stocked, keeping existing entry");
                continue;
            }
            items.push(adapter::to_stock_item(partner_item));
        }
        Self {
            items,
            store,
            notifier,
        }
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    /// First item with `code`, matching the item [`InventoryLedger::sell`] acts on.
    pub fn find(&self, code: &str) -> Option<&StockItem> {
        self.items.iter().find(|item| item.product_code() == code)
    }

    pub fn store(&self) -> &CsvRecordStore {
        &self.store
    }

    pub fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        &mut self.notifier
    }

    /// Appends `item` even when its code is already stocked, then publishes it.
    /// Persisting is left to the caller.
    pub fn buy(&mut self, item: StockItem) {
        log::info!("bought {} x{}", item.product_code(), item.quantity_in_stock());
        self.items.push(item);
        if let Some(added) = self.items.last() {
            self.notifier.publish(added);
        }
    }

    pub fn sell(&mut self, code: &str, quantity: i64) -> Outcome<Option<SalesRecord>> {
        self.sell_at(code, quantity, Local::now().naive_local())
    }

    /// Sells from the first item with `code` only.
    ///
    /// A quantity that would go negative is left unchanged without an error;
    /// callers check sufficiency first. The change is still published and the
    /// sale still recorded. An unknown code does nothing and returns `None`.
    pub fn sell_at(
        &mut self,
        code: &str,
        quantity: i64,
        when: NaiveDateTime,
    ) -> Outcome<Option<SalesRecord>> {
        let Some(item) = self.items.iter_mut().find(|item| item.product_code() == code) else {
            log::debug!("sell ignored, no item with code {code}");
            return Outcome::clean(None);
        };

        let in_stock = item.quantity_in_stock();
        let updated = i64::from(in_stock)
            .checked_sub(quantity)
            .is_some_and(|remaining| item.set_quantity_in_stock(remaining));
        if !updated {
            log::warn!(
                "sale of {quantity} x {code} exceeds the {in_stock} in stock, quantity unchanged"
            );
        }
        self.notifier.publish(item);

        let record = SalesRecord::at(when, code, quantity, item.unit_price());
        match self.store.append_sale(&record) {
            Ok(_) => Outcome::clean(Some(record)),
            Err(e) => Outcome::with_error(Some(record), e),
        }
    }

    /// Rewrites the whole stock file from the in-memory list.
    pub fn persist_stock(&self) -> Result<(), StoreError> {
        self.store.write_stock(&self.items)
    }

    /// Sales history as currently on disk.
    pub fn current_sales_log(&self) -> Outcome<Vec<SalesRecord>> {
        self.store.load_sales()
    }
}
