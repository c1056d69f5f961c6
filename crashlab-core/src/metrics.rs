//! Aggregate metrics and the derived dashboard view.

use serde::{Deserialize, Serialize};

use crate::domain::OutcomeRecord;
use crate::simulator::BalanceSeries;

/// Prediction hit-rate over the full record sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub correct: usize,
    /// `correct / total`; `None` when there are no records.
    pub accuracy: Option<f64>,
}

impl AccuracySummary {
    pub fn from_records(records: &[OutcomeRecord]) -> Self {
        let total = records.len();
        let correct = records.iter().filter(|r| r.correct()).count();
        let accuracy = if total == 0 {
            None
        } else {
            Some(correct as f64 / total as f64)
        };
        Self {
            total,
            correct,
            accuracy,
        }
    }

    /// Accuracy as `"50.0%"`, or `None` when undefined.
    pub fn accuracy_pct(&self) -> Option<String> {
        self.accuracy.map(|a| format!("{:.1}%", a * 100.0))
    }
}

/// Everything one render needs, recomputed from the records each time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub series: BalanceSeries,
    pub summary: AccuracySummary,
}

impl Dashboard {
    pub fn from_records(records: &[OutcomeRecord]) -> Self {
        Self {
            series: BalanceSeries::compute(records),
            summary: AccuracySummary::from_records(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.total == 0
    }
}

/// Balance as `"0.1100 SOL"`.
pub fn format_balance(balance: f64) -> String {
    format!("{balance:.4} SOL")
}
