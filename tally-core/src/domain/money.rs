//! Monetary amount value object

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A positive monetary amount, fixed to two decimal places at construction.
///
/// There is no way to obtain an `Amount` that is zero, negative, or not a
/// real number. Deserialization goes through the same check, so a store file
/// cannot smuggle an invalid amount back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Validate and round a raw numeric input.
    ///
    /// Halves round away from zero, so 10.455 becomes 10.46.
    pub fn new(value: f64) -> Result<Self> {
        if value <= 0.0 {
            return Err(Error::validation("amount must be greater than zero"));
        }
        if !value.is_finite() {
            return Err(Error::validation("amount must be a valid number"));
        }
        let value = Decimal::from_f64(value)
            .ok_or_else(|| Error::validation("amount must be a valid number"))?;
        Ok(Self(
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ))
    }

    /// The wrapped decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO {
            return Err(Error::validation("amount must be greater than zero"));
        }
        Ok(Self(
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_values() {
        let amount = Amount::new(1000.0).unwrap();
        assert_eq!(amount.value(), Decimal::new(1000, 0));

        let amount = Amount::new(300.5).unwrap();
        assert_eq!(amount.value(), Decimal::new(3005, 1));
    }

    #[test]
    fn test_rounds_to_two_decimal_places() {
        let amount = Amount::new(10.456).unwrap();
        assert_eq!(amount.value(), Decimal::new(1046, 2));

        let amount = Amount::new(10.454).unwrap();
        assert_eq!(amount.value(), Decimal::new(1045, 2));
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(Amount::new(0.0).is_err());
        assert!(Amount::new(-5.0).is_err());

        let err = Amount::new(-1.0).unwrap_err();
        assert!(err.to_string().contains("amount must be greater than zero"));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Amount::new(f64::NAN).unwrap_err();
        assert!(err.to_string().contains("amount must be a valid number"));

        assert!(Amount::new(f64::INFINITY).is_err());
        assert!(Amount::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_renders_with_two_decimals() {
        assert_eq!(Amount::new(1000.0).unwrap().to_string(), "1000.00");
        assert_eq!(Amount::new(300.5).unwrap().to_string(), "300.50");
    }

    #[test]
    fn test_deserialization_revalidates() {
        let amount: Amount = serde_json::from_str("\"42.50\"").unwrap();
        assert_eq!(amount.value(), Decimal::new(4250, 2));

        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"0\"").is_err());
    }
}
