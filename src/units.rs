//! Weight units. Logged weights are stored in pounds.

use std::str::FromStr;

use crate::error::ConfigError;

const KILOS_PER_POUND: f64 = 0.45359237;

/// Converts pounds to whole kilograms.
pub fn pounds_to_kilos(pounds: f64) -> f64 {
    (pounds * KILOS_PER_POUND).round()
}

/// Converts kilograms to whole pounds.
pub fn kilos_to_pounds(kilos: f64) -> f64 {
    (kilos / KILOS_PER_POUND).round()
}

/// Preferred display unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Pounds,
    Kilos,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Pounds => "lbs",
            Unit::Kilos => "kg",
        }
    }

    /// Stored (pound) value -> display value
    pub fn convert_to(&self, pounds: f64) -> f64 {
        match self {
            Unit::Pounds => pounds,
            Unit::Kilos => pounds_to_kilos(pounds),
        }
    }

    /// Stored value -> display value without rounding, for rates and deltas
    pub fn scale(&self, pounds: f64) -> f64 {
        match self {
            Unit::Pounds => pounds,
            Unit::Kilos => pounds * KILOS_PER_POUND,
        }
    }

    /// Display value -> stored (pound) value
    pub fn convert_from(&self, value: f64) -> f64 {
        match self {
            Unit::Pounds => value,
            Unit::Kilos => kilos_to_pounds(value),
        }
    }

    /// Format a stored weight for display, e.g. "100kg"
    pub fn format(&self, pounds: f64) -> String {
        format!("{}{}", self.convert_to(pounds), self.suffix())
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Pounds),
            "kg" | "kgs" | "kilo" | "kilos" => Ok(Unit::Kilos),
            _ => Err(ConfigError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kilos() {
        assert_eq!(pounds_to_kilos(225.0), 102.0);
        assert_eq!(pounds_to_kilos(45.0), 20.0);
        assert_eq!(pounds_to_kilos(0.0), 0.0);
    }

    #[test]
    fn test_kilos_to_pounds() {
        assert_eq!(kilos_to_pounds(100.0), 220.0);
        assert_eq!(kilos_to_pounds(20.0), 44.0);
    }

    #[test]
    fn test_unit_convert() {
        assert_eq!(Unit::Pounds.convert_to(135.0), 135.0);
        assert_eq!(Unit::Kilos.convert_to(135.0), 61.0);
        assert_eq!(Unit::Pounds.convert_from(61.0), 61.0);
        assert_eq!(Unit::Kilos.convert_from(61.0), 134.0);
    }

    #[test]
    fn test_unit_scale_unrounded() {
        assert_eq!(Unit::Pounds.scale(2.5), 2.5);
        assert!((Unit::Kilos.scale(2.5) - 1.1339809).abs() < 1e-6);
    }

    #[test]
    fn test_unit_format() {
        assert_eq!(Unit::Pounds.format(185.0), "185lbs");
        assert_eq!(Unit::Kilos.format(220.0), "100kg");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!(Unit::from_str("lbs").unwrap(), Unit::Pounds);
        assert_eq!(Unit::from_str(" Kilos ").unwrap(), Unit::Kilos);
        assert_eq!(Unit::from_str("KG").unwrap(), Unit::Kilos);
        assert!(Unit::from_str("stone").is_err());
    }
}
