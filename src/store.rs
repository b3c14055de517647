use chrono::{Local, NaiveDate};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub price: f64,
}

impl PriceRecord {
    pub fn today(price: f64) -> Self {
        Self {
            date: Local::now().date_naive(),
            price,
        }
    }
}

impl fmt::Display for PriceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.price)
    }
}

pub struct PriceStore {
    path: PathBuf,
}

impl PriceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns `Ok(None)` when the data file is missing or empty. Only the
    /// price token of the last line is parsed; the date is never read back.
    pub fn read_last_price(&self) -> Result<Option<f64>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let line = match content.lines().last() {
            Some(line) => line,
            None => return Ok(None),
        };

        let price = line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| StoreError::Malformed(line.to_string()))?
            .parse::<f64>()
            .map_err(|_| StoreError::Malformed(line.to_string()))?;

        Ok(Some(price))
    }

    pub fn append_price(&self, price: f64) -> Result<(), StoreError> {
        let record = PriceRecord::today(price);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", record)?;
        Ok(())
    }
}
