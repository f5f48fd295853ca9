use crate::convert::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit of length
///
/// Serialized as its symbol ("mm", "km", ...). Deserialization goes through
/// [`Unit::from_str`], so names and labels are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Unit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "mi")]
    Mile,
}

impl Unit {
    /// All units in picker order
    pub const ALL: [Unit; 6] = [
        Unit::Millimeter,
        Unit::Meter,
        Unit::Kilometer,
        Unit::Inch,
        Unit::Foot,
        Unit::Mile,
    ];

    /// How many millimeters make up one of this unit
    pub const fn factor_to_mm(self) -> f64 {
        match self {
            Unit::Millimeter => 1.0,
            Unit::Meter => 1_000.0,
            Unit::Kilometer => 1_000_000.0,
            Unit::Inch => 25.4,
            Unit::Foot => 304.8,
            Unit::Mile => 1_609_344.0,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Mile => "mi",
        }
    }

    /// Display name. "Milimeters" is spelled the way users have always seen it.
    pub const fn label(self) -> &'static str {
        match self {
            Unit::Millimeter => "Milimeters",
            Unit::Meter => "Meters",
            Unit::Kilometer => "Kilometers",
            Unit::Inch => "Inches",
            Unit::Foot => "Feet",
            Unit::Mile => "Miles",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Unit::Millimeter => "millimeter",
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Inch => "inch",
            Unit::Foot => "foot",
            Unit::Mile => "mile",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Unit::Millimeter => "millimeters",
            Unit::Meter => "meters",
            Unit::Kilometer => "kilometers",
            Unit::Inch => "inches",
            Unit::Foot => "feet",
            Unit::Mile => "miles",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| {
                tag.eq_ignore_ascii_case(unit.symbol())
                    || tag.eq_ignore_ascii_case(unit.name())
                    || tag.eq_ignore_ascii_case(unit.plural())
                    || tag.eq_ignore_ascii_case(unit.label())
            })
            .ok_or_else(|| ConvertError::InvalidUnit(format!("unknown unit tag '{}'", s)))
    }
}

impl TryFrom<String> for Unit {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single evaluation: an amount and the units to convert between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    #[serde(rename = "from")]
    pub source: Unit,
    #[serde(rename = "to")]
    pub target: Unit,
}

/// A request together with its converted value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub value: f64,
    /// `value` rendered for display
    pub formatted: String,
}

impl Conversion {
    /// First display line, echoing the raw input text: `"12 Inches ="`
    pub fn input_line(&self, input: &str) -> String {
        format!("{} {} =", input, self.request.source.label())
    }

    /// Second display line: `"1 Feet"`
    pub fn output_line(&self) -> String {
        format!("{} {}", self.formatted, self.request.target.label())
    }
}
