//! Text codec for the `NavPos` property

use tracing::debug;

/// Parse a stored navigation position.
///
/// Returns `None` for anything that is not a finite, non-negative decimal.
/// Such values carry no ordering and are skipped by the orderer.
pub fn parse_position(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        // Folds "-0" into 0.0
        Ok(value) if value == 0.0 => Some(0.0),
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        Ok(value) => {
            debug!("Ignoring out-of-range navigation position {:?} ({})", raw, value);
            None
        }
        Err(e) => {
            debug!("Ignoring malformed navigation position {:?}: {}", raw, e);
            None
        }
    }
}

/// Format a navigation position for storage.
///
/// Uses the shortest text that parses back to the same value. Integral
/// values keep a single fractional digit, so `4.0` is written as `"4.0"`.
pub fn format_position(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
