//! Multiplier input parsing and normalization.
//!
//! A multiplier can be typed as a decimal (`1.87`) or as whole percent (`187`).
//! Anything above 10 is taken as percent form and divided by 100, which means a
//! genuine multiplier between 10 and 100 (e.g. `15.5`) is read as `0.155`. That
//! ambiguity is kept as-is.

use crate::session::SessionError;

/// Values strictly above this are treated as percent form.
pub const PERCENT_CUTOFF: f64 = 10.0;

/// Collapse percent-form entries onto the decimal scale.
pub fn normalize(value: f64) -> f64 {
    if value > PERCENT_CUTOFF {
        value / 100.0
    } else {
        value
    }
}

/// Parse raw user text into a normalized multiplier.
///
/// Empty, non-numeric and non-finite input all map to
/// [`SessionError::InvalidInput`].
pub fn parse_multiplier(raw: &str) -> Result<f64, SessionError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SessionError::InvalidInput)?;
    if !value.is_finite() {
        return Err(SessionError::InvalidInput);
    }
    Ok(normalize(value))
}
