use std::path::PathBuf;

/// Failures at the file boundary. Loads still hand back whatever was parsed
/// before one of these occurred.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed row at line {line} of {path}: {reason}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        StoreError::Csv {
            path: path.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
    #[error("unknown product code: {0}")]
    UnknownProduct(String),
    #[error("invalid quantity to sell: {requested} (in stock: {available})")]
    InvalidQuantity { requested: i64, available: u32 },
    #[error("total for {quantity} x {code} is too large to record")]
    TotalOutOfRange { code: String, quantity: i64 },
    #[error("parse error: {0}")]
    Parse(String),
}
