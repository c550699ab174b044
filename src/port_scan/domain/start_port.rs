use crate::shared::error::PortFinderError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// MySQL's conventional default port; the lowest accepted starting port
pub const MINIMUM_START_PORT: u16 = 3306;

/// The `--start` option after validation.
///
/// Any number is accepted as long as it is at least 3306, so `3306.0` and
/// `70000` pass. Validated before any file is parsed. The recommendation
/// itself is not bounded by it (see DESIGN.md); it is carried into the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartPort(f64);

impl StartPort {
    pub fn value(self) -> f64 {
        self.0
    }

    /// The value as an integer when it has no fractional part
    fn as_integer(self) -> Option<u64> {
        (self.0.fract() == 0.0 && self.0 <= u64::MAX as f64).then_some(self.0 as u64)
    }
}

impl Default for StartPort {
    fn default() -> Self {
        Self(f64::from(MINIMUM_START_PORT))
    }
}

impl FromStr for StartPort {
    type Err = PortFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PortFinderError::InvalidStartOption {
            value: s.to_string(),
            minimum: MINIMUM_START_PORT,
        };

        let value: f64 = s.trim().parse().map_err(|_| invalid())?;
        // f64 parsing also accepts `inf` and `NaN`
        if !value.is_finite() || value < f64::from(MINIMUM_START_PORT) {
            return Err(invalid());
        }

        Ok(Self(value))
    }
}

impl fmt::Display for StartPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for StartPort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(s: &str) -> StartPort {
        s.parse().unwrap()
    }

    #[test]
    fn test_minimum_is_accepted() {
        assert_eq!(start("3306").value(), 3306.0);
    }

    #[test]
    fn test_above_minimum_is_accepted() {
        assert_eq!(start("5432").value(), 5432.0);
        assert_eq!(start(" 3307 ").value(), 3307.0);
    }

    #[test]
    fn test_any_number_at_or_above_minimum_is_accepted() {
        assert_eq!(start("70000").value(), 70000.0);
        assert_eq!(start("3306.0").value(), 3306.0);
        assert_eq!(start("3306.5").value(), 3306.5);
        assert_eq!(start("3.4e3").value(), 3400.0);
    }

    #[test]
    fn test_below_minimum_is_rejected() {
        let err = "3000".parse::<StartPort>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Given PORT [3000] needs to be a number >= 3306."
        );
        assert!("3305.9".parse::<StartPort>().is_err());
        assert!("-3306".parse::<StartPort>().is_err());
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!("abc".parse::<StartPort>().is_err());
        assert!("".parse::<StartPort>().is_err());
        assert!("33o6".parse::<StartPort>().is_err());
        assert!("inf".parse::<StartPort>().is_err());
        assert!("NaN".parse::<StartPort>().is_err());
    }

    #[test]
    fn test_display_drops_integral_fraction() {
        assert_eq!(start("3306.0").to_string(), "3306");
        assert_eq!(start("70000").to_string(), "70000");
        assert_eq!(start("3306.5").to_string(), "3306.5");
    }

    #[test]
    fn test_serializes_as_json_number() {
        assert_eq!(serde_json::to_string(&start("3306.0")).unwrap(), "3306");
        assert_eq!(serde_json::to_string(&start("3306.5")).unwrap(), "3306.5");
    }

    #[test]
    fn test_default() {
        assert_eq!(StartPort::default().value(), f64::from(MINIMUM_START_PORT));
    }
}
