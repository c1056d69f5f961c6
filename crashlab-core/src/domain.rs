//! Domain types: prediction direction and the scored outcome record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Multiplier at or below which an `Under` prediction wins.
pub const THRESHOLD: f64 = 2.0;

/// Direction of a guess relative to [`THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    Above,
    Under,
}

impl Prediction {
    pub fn as_str(self) -> &'static str {
        match self {
            Prediction::Above => "Above",
            Prediction::Under => "Under",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error for a prediction string other than `Above`/`Under`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prediction '{0}'")]
pub struct ParsePredictionError(pub String);

impl FromStr for Prediction {
    type Err = ParsePredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Above" => Ok(Prediction::Above),
            "Under" => Ok(Prediction::Under),
            other => Err(ParsePredictionError(other.to_string())),
        }
    }
}

/// Whether `prediction` wins against `actual`.
///
/// Above wins strictly above the threshold; Under wins at or below it.
pub fn is_correct(prediction: Prediction, actual: f64) -> bool {
    match prediction {
        Prediction::Above => actual > THRESHOLD,
        Prediction::Under => actual <= THRESHOLD,
    }
}

/// One scored observation.
///
/// Fields are private so `correct` can only come from [`is_correct`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeRecord {
    prediction: Prediction,
    actual: f64,
    correct: bool,
}

impl OutcomeRecord {
    /// Score `prediction` against the normalized multiplier `actual`.
    pub fn evaluate(prediction: Prediction, actual: f64) -> Self {
        Self {
            prediction,
            actual,
            correct: is_correct(prediction, actual),
        }
    }

    pub fn prediction(&self) -> Prediction {
        self.prediction
    }

    pub fn actual(&self) -> f64 {
        self.actual
    }

    pub fn correct(&self) -> bool {
        self.correct
    }

    /// `"Correct"` or `"Wrong"`.
    pub fn verdict(&self) -> &'static str {
        if self.correct {
            "Correct"
        } else {
            "Wrong"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_wins_strictly_above_threshold() {
        assert!(is_correct(Prediction::Above, 2.01));
        assert!(!is_correct(Prediction::Above, 2.0));
        assert!(!is_correct(Prediction::Above, 1.0));
    }

    #[test]
    fn under_wins_at_or_below_threshold() {
        assert!(is_correct(Prediction::Under, 2.0));
        assert!(is_correct(Prediction::Under, 1.0));
        assert!(!is_correct(Prediction::Under, 2.01));
    }

    #[test]
    fn evaluate_stores_rule_result() {
        let r = OutcomeRecord::evaluate(Prediction::Above, 2.5);
        assert_eq!(r.prediction(), Prediction::Above);
        assert_eq!(r.actual(), 2.5);
        assert!(r.correct());
        assert_eq!(r.verdict(), "Correct");

        let r = OutcomeRecord::evaluate(Prediction::Under, 2.5);
        assert!(!r.correct());
        assert_eq!(r.verdict(), "Wrong");
    }

    #[test]
    fn prediction_parse_and_display() {
        assert_eq!("Above".parse::<Prediction>(), Ok(Prediction::Above));
        assert_eq!(" Under ".parse::<Prediction>(), Ok(Prediction::Under));
        assert!("above".parse::<Prediction>().is_err());
        assert_eq!(Prediction::Under.to_string(), "Under");
        assert_eq!(format!("{:<6}|", Prediction::Above), "Above |");
    }
}
