//! Unitless payment amount.
//!
//! Wraps `rust_decimal` so amounts parse and print exactly, without the
//! artifacts binary floats introduce. Display strips trailing zeros, so
//! `100` prints as `100` and `10.50` as `10.5`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A payment amount with no currency and no fixed scale.
///
/// No sign or range checks are applied; negative and zero amounts are valid
/// values and are forwarded to providers unchanged.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use payment_gateway_facade::Amount;
///
/// let amount = Amount::from_str("10.50").unwrap();
/// assert_eq!(amount.to_string(), "10.5");
/// assert_eq!(Amount::from(100).to_string(), "100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount from a `Decimal`, dropping trailing zeros.
    pub fn new(value: Decimal) -> Self {
        Amount(value.normalize())
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `true` if this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Self {
                    Amount::new(Decimal::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32, u64);

impl TryFrom<f64> for Amount {
    type Error = rust_decimal::Error;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Decimal::try_from(value).map(Amount::new)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 prints as 0
        if self.0.is_zero() {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
