// Engine configuration: tax rate, booking id format and search defaults
use crate::error::ConfigError;
use crate::pricing::DEFAULT_TAX_RATE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tax_rate: f64,
    pub booking_id_prefix: String,
    pub booking_id_length: usize,
    pub default_guests: u32,
    pub max_guests: u32,
    pub default_min_price: f64,
    pub default_max_price: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            booking_id_prefix: "BK-".to_string(),
            booking_id_length: 8,
            default_guests: 2,
            max_guests: 10,
            default_min_price: 0.0,
            default_max_price: 1000.0,
        }
    }
}

impl EngineConfig {
    // Parse a (possibly partial) JSON config; missing keys take their defaults
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json_str)
            .map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.tax_rate) {
            return Err(ConfigError::InvalidValue(format!(
                "tax_rate must be in [0, 1), got {}",
                self.tax_rate
            )));
        }

        if self.booking_id_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "booking_id_prefix must not be empty".to_string(),
            ));
        }

        if self.booking_id_length < 4 {
            return Err(ConfigError::InvalidValue(format!(
                "booking_id_length must be at least 4, got {}",
                self.booking_id_length
            )));
        }

        if self.default_guests == 0 || self.default_guests > self.max_guests {
            return Err(ConfigError::InvalidValue(format!(
                "default_guests must be between 1 and {}, got {}",
                self.max_guests, self.default_guests
            )));
        }

        if self.default_min_price < 0.0 || self.default_min_price > self.default_max_price {
            return Err(ConfigError::InvalidValue(format!(
                "default price range [{}, {}] is invalid",
                self.default_min_price, self.default_max_price
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tax_rate, 0.12);
        assert_eq!(config.booking_id_prefix, "BK-");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "tax_rate": 0.2 }"#).unwrap();
        assert_eq!(config.tax_rate, 0.2);
        assert_eq!(config.booking_id_length, 8);
        assert_eq!(config.default_max_price, 1000.0);
    }

    #[test]
    fn test_malformed_json() {
        let result = EngineConfig::from_json("{ tax_rate: ");
        assert!(matches!(result, Err(ConfigError::JsonParseError(_))));
    }

    #[test_case(r#"{ "tax_rate": 1.5 }"#; "#1 tax rate too high")]
    #[test_case(r#"{ "tax_rate": -0.1 }"#; "#2 negative tax rate")]
    #[test_case(r#"{ "booking_id_prefix": "  " }"#; "#3 blank prefix")]
    #[test_case(r#"{ "booking_id_length": 2 }"#; "#4 id too short")]
    #[test_case(r#"{ "default_guests": 12 }"#; "#5 guests above max")]
    #[test_case(r#"{ "default_min_price": 900, "default_max_price": 100 }"#; "#6 inverted price range")]
    fn test_invalid_values_rejected(json: &str) {
        let result = EngineConfig::from_json(json);
        assert!(
            matches!(result, Err(ConfigError::InvalidValue(_))),
            "expected InvalidValue, got {:?}",
            result
        );
    }
}
