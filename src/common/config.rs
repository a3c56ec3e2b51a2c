use std::path::{Path, PathBuf};

pub const DEFAULT_RESOURCE_DIR: &str = "resources";
pub const DEFAULT_STOCK_FILE: &str = "AshersSportsCollective.csv";
pub const DEFAULT_PARTNER_FILE: &str = "MengdasSportyMart.csv";
pub const SALES_FILE_PREFIX: &str = "SalesTransactions_";

/// What to do with partner rows whose department id has no known prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UnknownDepartmentPolicy {
    /// Keep the row under a `null-<code>-MSM` product code.
    #[default]
    PassThrough,
    /// Drop the row while merging.
    Reject,
}

/// Where the three record kinds live and how partner rows are merged.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub resource_dir: PathBuf,
    pub stock_file: String,
    pub partner_file: String,
    pub sales_prefix: String,
    pub unknown_departments: UnknownDepartmentPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_DIR)
    }
}

impl StoreConfig {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            stock_file: DEFAULT_STOCK_FILE.to_string(),
            partner_file: DEFAULT_PARTNER_FILE.to_string(),
            sales_prefix: SALES_FILE_PREFIX.to_string(),
            unknown_departments: UnknownDepartmentPolicy::default(),
        }
    }

    pub fn with_unknown_departments(mut self, policy: UnknownDepartmentPolicy) -> Self {
        self.unknown_departments = policy;
        self
    }

    pub fn stock_path(&self) -> PathBuf {
        self.resource_dir.join(&self.stock_file)
    }

    pub fn partner_path(&self) -> PathBuf {
        self.resource_dir.join(&self.partner_file)
    }

    pub fn sales_dir(&self) -> &Path {
        &self.resource_dir
    }
}
