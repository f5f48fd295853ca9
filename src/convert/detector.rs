use crate::convert::error::ConvertError;
use crate::convert::types::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimals, exponent) followed by a unit tag
    /// Examples: "12 in", "1.5km", "-3 ft", "1e3 mm"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([a-zA-Z]+)$"
    ).unwrap();
}

/// Check if a string looks like "<number> <unit>"
pub fn looks_like_quantity(s: &str) -> bool {
    QUANTITY_PATTERN.is_match(s.trim())
}

/// A quantity split out of text like "1.5 km"
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    /// The number exactly as typed, for echoing back
    pub amount_text: String,
    pub amount: f64,
    pub unit: Unit,
}

/// Split a quantity string into its amount and unit
///
/// Amounts that overflow to infinity are a `ParseError`, not 0.
pub fn parse_quantity(s: &str) -> Result<Quantity, ConvertError> {
    let trimmed = s.trim();
    let captures = QUANTITY_PATTERN.captures(trimmed).ok_or_else(|| {
        ConvertError::ParseError(format!("'{}' is not a quantity like '12 in'", s))
    })?;

    let amount_text = &captures[1];
    let amount = amount_text
        .parse::<f64>()
        .map_err(|e| ConvertError::ParseError(format!("bad amount in '{}': {}", s, e)))?;
    if !amount.is_finite() {
        return Err(ConvertError::ParseError(format!(
            "amount in '{}' is out of range",
            s
        )));
    }
    let unit = captures[2].parse::<Unit>()?;

    Ok(Quantity {
        amount_text: amount_text.to_string(),
        amount,
        unit,
    })
}
