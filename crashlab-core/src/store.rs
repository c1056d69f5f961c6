//! Record store — the single durable state.
//!
//! The CSV layout is three named columns, header first, one row per record in
//! insertion order:
//!
//! ```text
//! prediction,actual,correct
//! Above,2.5,True
//! Under,1.87,True
//! ```
//!
//! `append` reads the whole file and rewrites it. Two processes writing the
//! same file can overwrite each other; there is no locking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{is_correct, OutcomeRecord, Prediction};

/// Column names, in file order.
pub const HEADER: [&str; 3] = ["prediction", "actual", "correct"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unknown prediction '{value}'")]
    InvalidPrediction { row: usize, value: String },

    #[error("row {row}: '{value}' is not a boolean")]
    InvalidBool { row: usize, value: String },

    #[error("row {row}: stored 'correct' flag disagrees with prediction and actual")]
    InconsistentRecord { row: usize },
}

/// Ordered, append-only record storage.
pub trait RecordStore {
    /// All records in insertion order. Missing storage is an empty sequence.
    fn load(&self) -> Result<Vec<OutcomeRecord>, StoreError>;

    /// Add one record at the end.
    fn append(&mut self, record: OutcomeRecord) -> Result<(), StoreError>;

    /// Drop every record. Clearing an empty store is a no-op.
    fn clear(&mut self) -> Result<(), StoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn load(&self) -> Result<Vec<OutcomeRecord>, StoreError> {
        (**self).load()
    }

    fn append(&mut self, record: OutcomeRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<OutcomeRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<OutcomeRecord>) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<OutcomeRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: OutcomeRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        Ok(())
    }
}

/// CSV file store.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    prediction: String,
    actual: f64,
    correct: String,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, records: &[OutcomeRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(HEADER)?;
        for r in records {
            wtr.write_record([
                r.prediction().as_str(),
                &format!("{:?}", r.actual()),
                bool_field(r.correct()),
            ])?;
        }
        wtr.flush()?;
        debug!(path = %self.path.display(), rows = records.len(), "wrote record file");
        Ok(())
    }
}

impl RecordStore for CsvRecordStore {
    fn load(&self) -> Result<Vec<OutcomeRecord>, StoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no record file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
        let mut records = Vec::new();
        for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
            let row_no = i + 1;
            let row = row?;
            records.push(decode_row(row_no, row)?);
        }
        debug!(path = %self.path.display(), rows = records.len(), "loaded record file");
        Ok(records)
    }

    fn append(&mut self, record: OutcomeRecord) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed record file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn decode_row(row: usize, raw: CsvRow) -> Result<OutcomeRecord, StoreError> {
    let prediction: Prediction = raw
        .prediction
        .parse()
        .map_err(|_| StoreError::InvalidPrediction {
            row,
            value: raw.prediction.clone(),
        })?;
    let correct = parse_bool(&raw.correct).ok_or_else(|| StoreError::InvalidBool {
        row,
        value: raw.correct.clone(),
    })?;
    if correct != is_correct(prediction, raw.actual) {
        warn!(row, "rejecting record with inconsistent correct flag");
        return Err(StoreError::InconsistentRecord { row });
    }
    Ok(OutcomeRecord::evaluate(prediction, raw.actual))
}

pub(crate) fn bool_field(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
