//! CrashLab Core — outcome records, prediction sources, balance simulator, storage.
//!
//! This crate holds everything the front ends share:
//! - Domain types (prediction direction, outcome record with its correctness rule)
//! - Multiplier input normalization
//! - Prediction sources (fair coin flip, seeded, scripted)
//! - Flat and martingale balance replay over the recorded sequence
//! - Aggregate accuracy metrics
//! - Record store trait with CSV and in-memory implementations
//! - Session controller tying input, prediction, storage and replay together

pub mod config;
pub mod domain;
pub mod export;
pub mod metrics;
pub mod normalize;
pub mod rng;
pub mod session;
pub mod simulator;
pub mod store;

pub use config::{ConfigError, CrashlabConfig};
pub use domain::{OutcomeRecord, Prediction};
pub use metrics::{AccuracySummary, Dashboard};
pub use rng::{CoinFlip, PredictionSource, ScriptedSource};
pub use session::{Session, SessionError, Submission};
pub use simulator::{BalanceSeries, Strategy};
pub use store::{CsvRecordStore, MemoryStore, RecordStore, StoreError};
