// Glue between command-line arguments and the converter
use crate::config::Config;
use crate::convert::{
    looks_like_quantity, parse_quantity, Conversion, ConversionRequest, ConvertError, Unit,
};
use std::path::Path;
use tracing::debug;

/// A request ready to evaluate, plus the amount text to echo back
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedConversion {
    pub input: String,
    pub request: ConversionRequest,
}

impl PreparedConversion {
    pub fn evaluate(&self) -> Conversion {
        self.request.evaluate()
    }

    /// The two display lines, or pretty JSON when `json` is set
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        let conversion = self.evaluate();
        if json {
            serde_json::to_string_pretty(&conversion)
        } else {
            Ok(format!(
                "{}\n{}",
                conversion.input_line(&self.input),
                conversion.output_line()
            ))
        }
    }
}

/// Load the config file if present, otherwise the built-in km -> mi defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConvertError> {
    let path = path.as_ref();
    if path.exists() {
        Config::load_from_file(path)
    } else {
        debug!("no config at {}, using built-in defaults", path.display());
        Ok(Config::empty())
    }
}

pub fn pick_unit(tag: Option<&str>, fallback: Unit) -> Result<Unit, ConvertError> {
    match tag {
        Some(tag) => tag.parse(),
        None => Ok(fallback),
    }
}

/// Assemble the `convert` subcommand's request
///
/// Without `--from`, an amount like "12 in" carries its own source unit.
pub fn amount_request(
    config: &Config,
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<PreparedConversion, ConvertError> {
    if from.is_none() && looks_like_quantity(amount) {
        return quantity_request(config, amount, to);
    }

    let target = pick_unit(to, config.defaults.to)?;
    let source = pick_unit(from, config.defaults.from)?;
    Ok(PreparedConversion {
        input: amount.to_string(),
        request: ConversionRequest::from_input(amount, source, target),
    })
}

/// Assemble the `quantity` subcommand's request
pub fn quantity_request(
    config: &Config,
    quantity: &str,
    to: Option<&str>,
) -> Result<PreparedConversion, ConvertError> {
    let quantity = parse_quantity(quantity)?;
    let target = pick_unit(to, config.defaults.to)?;

    Ok(PreparedConversion {
        input: quantity.amount_text,
        request: ConversionRequest::new(quantity.amount, quantity.unit, target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inch_to_mm_config() -> Config {
        Config::load_from_str("[defaults]\nfrom = \"in\"\nto = \"mm\"\n").unwrap()
    }

    #[test]
    fn test_missing_config_falls_back_to_km_mi() {
        let config = load_config("/nonexistent/length-converter.toml").unwrap();
        assert_eq!(config.defaults.from, Unit::Kilometer);
        assert_eq!(config.defaults.to, Unit::Mile);
    }

    #[test]
    fn test_pick_unit() {
        assert_eq!(pick_unit(None, Unit::Foot).unwrap(), Unit::Foot);
        assert_eq!(pick_unit(Some("mi"), Unit::Foot).unwrap(), Unit::Mile);
        assert!(matches!(
            pick_unit(Some("cubit"), Unit::Foot),
            Err(ConvertError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_amount_uses_config_defaults() {
        let prepared = amount_request(&Config::empty(), "1", None, None).unwrap();
        assert_eq!(prepared.request.source, Unit::Kilometer);
        assert_eq!(prepared.request.target, Unit::Mile);

        let prepared = amount_request(&inch_to_mm_config(), "2", None, None).unwrap();
        assert_eq!(prepared.request.source, Unit::Inch);
        assert_eq!(prepared.request.target, Unit::Millimeter);
        assert_eq!(prepared.evaluate().value, 50.8);
    }

    #[test]
    fn test_amount_with_unknown_unit_fails() {
        let result = amount_request(&Config::empty(), "1", Some("cubit"), None);
        assert!(matches!(result, Err(ConvertError::InvalidUnit(_))));

        let result = amount_request(&Config::empty(), "1", None, Some("league"));
        assert!(matches!(result, Err(ConvertError::InvalidUnit(_))));
    }

    #[test]
    fn test_unparsable_amount_renders_zero() {
        let prepared = amount_request(&Config::empty(), "", None, None).unwrap();
        assert_eq!(prepared.render(false).unwrap(), " Kilometers =\n0 Miles");
    }

    #[test]
    fn test_amount_written_with_unit() {
        let prepared = amount_request(&Config::empty(), "12 in", None, Some("ft")).unwrap();
        assert_eq!(prepared.input, "12");
        assert_eq!(prepared.request.source, Unit::Inch);
        assert_eq!(prepared.request.target, Unit::Foot);

        // An explicit source unit turns the same text into a plain amount
        let prepared = amount_request(&Config::empty(), "12 in", Some("m"), None).unwrap();
        assert_eq!(prepared.request.amount, 0.0);
    }

    #[test]
    fn test_quantity_echoes_typed_amount() {
        let prepared = quantity_request(&Config::empty(), "1.5 km", None).unwrap();
        assert_eq!(prepared.input, "1.5");
        assert_eq!(prepared.request.target, Unit::Mile);
        assert_eq!(
            prepared.render(false).unwrap(),
            "1.5 Kilometers =\n0.932057 Miles"
        );

        let prepared = quantity_request(&Config::empty(), "1e3 mm", Some("m")).unwrap();
        assert_eq!(prepared.render(false).unwrap(), "1e3 Milimeters =\n1 Meters");
    }

    #[test]
    fn test_quantity_uses_config_target() {
        let prepared = quantity_request(&inch_to_mm_config(), "1 ft", None).unwrap();
        assert_eq!(prepared.request.target, Unit::Millimeter);
        assert_eq!(prepared.evaluate().formatted, "304.800000");
    }

    #[test]
    fn test_quantity_errors() {
        assert!(matches!(
            quantity_request(&Config::empty(), "1e400 km", None),
            Err(ConvertError::ParseError(_))
        ));
        assert!(matches!(
            quantity_request(&Config::empty(), "3 cubits", None),
            Err(ConvertError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_render_json() {
        let prepared = quantity_request(&Config::empty(), "12 in", Some("ft")).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&prepared.render(true).unwrap()).unwrap();
        assert_eq!(json["from"], "in");
        assert_eq!(json["to"], "ft");
        assert_eq!(json["amount"], 12.0);
        assert_eq!(json["formatted"], "1.000000");
    }
}
