//! Session controller: raw input in, scored record persisted, dashboard out.
//!
//! Every action runs to completion synchronously. The dashboard is rebuilt
//! from the store on each call rather than cached.

use thiserror::Error;
use tracing::info;

use crate::domain::OutcomeRecord;
use crate::metrics::Dashboard;
use crate::normalize::parse_multiplier;
use crate::rng::PredictionSource;
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    /// Input was empty, non-numeric or non-finite. Deliberately unclassified.
    #[error("invalid input")]
    InvalidInput,

    #[error("record store: {0}")]
    Store(#[from] StoreError),
}

/// Result of a successful Add.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub record: OutcomeRecord,
    /// Record count after this submission.
    pub total: usize,
}

impl Submission {
    /// `"Prediction: Above | Actual: 2.50 → Correct"`.
    pub fn message(&self) -> String {
        format!(
            "Prediction: {} | Actual: {:.2} → {}",
            self.record.prediction(),
            self.record.actual(),
            self.record.verdict()
        )
    }
}

pub struct Session<S, P> {
    store: S,
    source: P,
}

impl<S: RecordStore, P: PredictionSource> Session<S, P> {
    pub fn new(store: S, source: P) -> Self {
        Self { store, source }
    }

    /// Parse `raw`, draw a prediction, score it and persist the record.
    ///
    /// Invalid input returns before the prediction source or store is touched.
    /// The store is read before the append, so an `Err` here always means
    /// nothing was persisted.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, SessionError> {
        let actual = parse_multiplier(raw)?;
        let existing = self.store.load()?.len();
        let prediction = self.source.draw();
        let record = OutcomeRecord::evaluate(prediction, actual);
        self.store.append(record)?;
        let total = existing + 1;
        info!(
            prediction = %prediction,
            actual,
            correct = record.correct(),
            total,
            "recorded outcome"
        );
        Ok(Submission { record, total })
    }

    /// Drop every persisted record.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        info!("record store reset");
        Ok(())
    }

    pub fn records(&self) -> Result<Vec<OutcomeRecord>, SessionError> {
        Ok(self.store.load()?)
    }

    /// Recompute series and metrics from the current records.
    pub fn dashboard(&self) -> Result<Dashboard, SessionError> {
        Ok(Dashboard::from_records(&self.store.load()?))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
