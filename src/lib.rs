pub mod app;

pub mod common {
    pub mod config;
    pub mod error;
    pub mod event;
    pub mod money;
    pub mod outcome;
}

pub mod domain {
    pub mod adapter;
    pub mod ledger;
    pub mod partner_item;
    pub mod sales;
    pub mod stock_item;
}

pub mod io {
    pub mod reader;
    pub mod store;
    pub mod writer;
}

pub mod worker {
    pub mod handlers {
        pub mod buy;
        pub mod sell;
    }
    pub mod low_stock;
    pub mod notifier;
    pub mod processor;
}
