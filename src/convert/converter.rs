use crate::convert::formatter::format;
use crate::convert::types::{Conversion, ConversionRequest, Unit};
use tracing::debug;

/// Convert `amount` from one unit to another
///
/// The amount is scaled to millimeters and then divided down into the
/// target unit, so every pair of units shares the same path.
pub fn convert(amount: f64, source: Unit, target: Unit) -> f64 {
    let millimeters = amount * source.factor_to_mm();
    millimeters / target.factor_to_mm()
}

/// Parse raw amount text, falling back to 0 when it doesn't parse.
///
/// Text that parses to a non-finite value ("inf", "NaN", "1e400") is zeroed
/// as well, so every amount handed to [`convert`] is finite. Surrounding
/// whitespace is not trimmed: `" 5"` yields 0.
pub fn parse_amount(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("amount {:?} is not a finite number, using 0", text);
            0.0
        }
    }
}

impl ConversionRequest {
    pub fn new(amount: f64, source: Unit, target: Unit) -> Self {
        Self {
            amount,
            source,
            target,
        }
    }

    /// Build a request from raw amount text
    pub fn from_input(text: &str, source: Unit, target: Unit) -> Self {
        Self::new(parse_amount(text), source, target)
    }

    pub fn evaluate(&self) -> Conversion {
        let value = convert(self.amount, self.source, self.target);
        Conversion {
            request: *self,
            value,
            formatted: format(value),
        }
    }
}
