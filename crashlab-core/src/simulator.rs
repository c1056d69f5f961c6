//! Balance replay over the recorded outcome sequence.
//!
//! Both strategies only bet on `Above` predictions. An `Under` record leaves
//! the balance (and the martingale streak) untouched but still emits a point,
//! so every series has exactly one value per record.
//!
//! Martingale stakes are uncapped but saturate at `f64::MAX` once doubling
//! leaves the representable range (a streak of 1024+ losses). The balance can
//! then reach `-inf`, which is absorbing: a later win adds a finite stake, so
//! the series never turns `NaN`.
//!
//! Replay always starts from scratch. Nothing is carried between calls, so the
//! same slice always yields bit-identical output.

use serde::{Deserialize, Serialize};

use crate::domain::{OutcomeRecord, Prediction};

/// Starting bankroll.
pub const INITIAL_BALANCE: f64 = 0.1;

/// Base stake per bet.
pub const BET_AMOUNT: f64 = 0.01;

/// Staking rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Constant stake.
    Flat,
    /// Stake doubles after each loss and resets after a win. Uncapped.
    Martingale,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Flat => "Flat",
            Strategy::Martingale => "Martingale",
        }
    }

    /// Stake for the next Above bet after `streak` consecutive losses.
    pub fn stake(self, streak: u32) -> f64 {
        match self {
            Strategy::Flat => BET_AMOUNT,
            Strategy::Martingale => {
                let stake = BET_AMOUNT * 2f64.powi(streak.min(i32::MAX as u32) as i32);
                stake.min(f64::MAX)
            }
        }
    }
}

/// Running state of one replay.
#[derive(Debug, Clone, Copy)]
struct Bankroll {
    balance: f64,
    streak: u32,
}

impl Bankroll {
    fn new() -> Self {
        Self {
            balance: INITIAL_BALANCE,
            streak: 0,
        }
    }

    /// Settle one record. Returns the stake placed (0.0 when nothing was bet).
    fn settle(&mut self, strategy: Strategy, record: &OutcomeRecord) -> f64 {
        if record.prediction() != Prediction::Above {
            return 0.0;
        }
        let stake = strategy.stake(self.streak);
        if record.correct() {
            self.balance += stake;
            self.streak = 0;
        } else {
            self.balance -= stake;
            self.streak = self.streak.saturating_add(1);
        }
        stake
    }
}

/// Replay `records` under `strategy`, one balance per record.
pub fn simulate(strategy: Strategy, records: &[OutcomeRecord]) -> Vec<f64> {
    let mut bankroll = Bankroll::new();
    records
        .iter()
        .map(|r| {
            bankroll.settle(strategy, r);
            bankroll.balance
        })
        .collect()
}

pub fn flat_balance_series(records: &[OutcomeRecord]) -> Vec<f64> {
    simulate(Strategy::Flat, records)
}

pub fn martingale_balance_series(records: &[OutcomeRecord]) -> Vec<f64> {
    simulate(Strategy::Martingale, records)
}

/// Stake the martingale replay places on each record (0.0 for Under).
pub fn martingale_stakes(records: &[OutcomeRecord]) -> Vec<f64> {
    let mut bankroll = Bankroll::new();
    records
        .iter()
        .map(|r| bankroll.settle(Strategy::Martingale, r))
        .collect()
}

/// Both replays side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSeries {
    pub flat: Vec<f64>,
    pub martingale: Vec<f64>,
}

impl BalanceSeries {
    pub fn compute(records: &[OutcomeRecord]) -> Self {
        Self {
            flat: flat_balance_series(records),
            martingale: martingale_balance_series(records),
        }
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn latest_flat(&self) -> Option<f64> {
        self.flat.last().copied()
    }

    pub fn latest_martingale(&self) -> Option<f64> {
        self.martingale.last().copied()
    }

    /// Series for one strategy.
    pub fn get(&self, strategy: Strategy) -> &[f64] {
        match strategy {
            Strategy::Flat => &self.flat,
            Strategy::Martingale => &self.martingale,
        }
    }
}
