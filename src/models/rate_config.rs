use super::error::AppError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const RATE_RANGE: RangeInclusive<f64> = 0.01..=2.0;
pub const VOLTAGE_RANGE: RangeInclusive<f64> = 100.0..=600.0;
pub const POWER_FACTOR_RANGE: RangeInclusive<f64> = 0.5..=1.0;

/// Flat fallback rate and electrical parameters, as served by `/config`.
/// Bounds mirror the server's validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub rate_per_kwh: f64,
    pub voltage: f64,
    pub power_factor: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            rate_per_kwh: 0.30,
            voltage: 460.0,
            power_factor: 0.88,
        }
    }
}

impl RateConfig {
    /// Checks every field against its allowed range, rate first.
    pub fn validate(&self) -> Result<(), AppError> {
        if !RATE_RANGE.contains(&self.rate_per_kwh) {
            return Err(AppError::Validation(
                "Rate must be between 0.01 and 2.00".to_string(),
            ));
        }
        if !VOLTAGE_RANGE.contains(&self.voltage) {
            return Err(AppError::Validation(
                "Voltage must be between 100 and 600".to_string(),
            ));
        }
        if !POWER_FACTOR_RANGE.contains(&self.power_factor) {
            return Err(AppError::Validation(
                "Power factor must be between 0.50 and 1.00".to_string(),
            ));
        }
        Ok(())
    }
}

/// Raw text of the config form inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct RateConfigForm {
    pub rate_per_kwh: String,
    pub voltage: String,
    pub power_factor: String,
}

impl From<RateConfig> for RateConfigForm {
    fn from(config: RateConfig) -> Self {
        Self {
            rate_per_kwh: config.rate_per_kwh.to_string(),
            voltage: config.voltage.to_string(),
            power_factor: config.power_factor.to_string(),
        }
    }
}

impl Default for RateConfigForm {
    fn default() -> Self {
        RateConfig::default().into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    RatePerKwh,
    Voltage,
    PowerFactor,
}

impl RateConfigForm {
    /// Replaces the raw text of one input.
    pub fn set(&mut self, field: ConfigField, value: String) {
        match field {
            ConfigField::RatePerKwh => self.rate_per_kwh = value,
            ConfigField::Voltage => self.voltage = value,
            ConfigField::PowerFactor => self.power_factor = value,
        }
    }

    /// Parses and validates the form. Text that is not a number fails the
    /// same range check as an out-of-range number.
    pub fn parse(&self) -> Result<RateConfig, AppError> {
        let number = |text: &str| text.trim().parse::<f64>().unwrap_or(f64::NAN);

        let config = RateConfig {
            rate_per_kwh: number(&self.rate_per_kwh),
            voltage: number(&self.voltage),
            power_factor: number(&self.power_factor),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(rate: &str, voltage: &str, pf: &str) -> RateConfigForm {
        RateConfigForm {
            rate_per_kwh: rate.to_string(),
            voltage: voltage.to_string(),
            power_factor: pf.to_string(),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(RateConfig::default().validate().is_ok());
        assert_eq!(RateConfigForm::default().parse().unwrap(), RateConfig::default());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(form("0.01", "100", "0.5").parse().is_ok());
        assert!(form("2", "600", "1").parse().is_ok());
    }

    #[test]
    fn test_rate_checked_first() {
        let err = form("5", "50", "2").parse().unwrap_err();
        assert_eq!(err, AppError::Validation("Rate must be between 0.01 and 2.00".to_string()));
    }

    #[test]
    fn test_voltage_and_power_factor_messages() {
        let err = form("0.3", "601", "0.88").parse().unwrap_err();
        assert_eq!(err.to_string(), "Voltage must be between 100 and 600");

        let err = form("0.3", "460", "0.49").parse().unwrap_err();
        assert_eq!(err.to_string(), "Power factor must be between 0.50 and 1.00");
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let err = form("abc", "460", "0.88").parse().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(form(" 0.25 ", "460", "0.88").parse().is_ok());
    }

    #[test]
    fn test_set_replaces_one_field() {
        let mut edited = RateConfigForm::default();
        edited.set(ConfigField::Voltage, "480".to_string());
        assert_eq!(edited.voltage, "480");
        assert_eq!(edited.parse().unwrap().voltage, 480.0);
        assert_eq!(edited.rate_per_kwh, RateConfigForm::default().rate_per_kwh);
    }
}
