//! Prediction sources.
//!
//! The prediction is an unconditioned fair coin flip. It sits behind
//! [`PredictionSource`] so the session can be driven by a seeded RNG or a fixed
//! script, which keeps correctness and replay testable without randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Prediction;

/// Anything that can hand out the next prediction direction.
pub trait PredictionSource {
    fn draw(&mut self) -> Prediction;
}

/// Fair coin flip: `Above` iff a uniform draw in `[0, 1)` exceeds 0.5.
#[derive(Debug, Clone)]
pub struct CoinFlip<R = StdRng> {
    rng: R,
}

impl CoinFlip<StdRng> {
    /// OS-seeded coin.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible coin: the same seed yields the same prediction sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> CoinFlip<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PredictionSource for CoinFlip<R> {
    fn draw(&mut self) -> Prediction {
        if self.rng.gen::<f64>() > 0.5 {
            Prediction::Above
        } else {
            Prediction::Under
        }
    }
}

/// Replays a fixed list of predictions, wrapping around at the end.
///
/// An empty script always draws `Above`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Prediction>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: impl Into<Vec<Prediction>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl PredictionSource for ScriptedSource {
    fn draw(&mut self) -> Prediction {
        if self.script.is_empty() {
            return Prediction::Above;
        }
        let p = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        p
    }
}

impl<T: PredictionSource + ?Sized> PredictionSource for Box<T> {
    fn draw(&mut self) -> Prediction {
        (**self).draw()
    }
}
