// Length conversion between six units, routed through millimeters

pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod types;


pub use converter::{convert, parse_amount};
pub use detector::{looks_like_quantity, parse_quantity, Quantity};
pub use error::ConvertError;
pub use formatter::format;
pub use types::{Conversion, ConversionRequest, Unit};

/// Human-readable name of a unit
pub fn label(unit: Unit) -> &'static str {
    unit.label()
}
