//! Price type for package rates
//!
//! Internally stores amounts in cents (i64) to avoid floating-point
//! precision issues when creators enter rates like "149.99".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount stored as cents (hundredths of a dollar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a Price from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Price
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a price from a string
    ///
    /// Accepts formats: "10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, PriceParseError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let cents = if let Some((dollars_str, cents_str)) = s.split_once('.') {
            let dollars: i64 = dollars_str
                .parse()
                .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?;

            if !cents_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(PriceParseError::InvalidFormat(s.to_string()));
            }

            // Pad or truncate the fractional part to 2 digits
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str[..2]
                    .parse()
                    .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?,
            };

            dollars * 100 + cents
        } else {
            // Integer format - assume dollars
            s.parse::<i64>()
                .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        if cents < 0 {
            return Err(PriceParseError::Negative);
        }

        Ok(Self(cents))
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

/// Errors from parsing a price string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    Empty,
    Negative,
    InvalidFormat(String),
}

impl fmt::Display for PriceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Price cannot be empty"),
            Self::Negative => write!(f, "Price cannot be negative"),
            Self::InvalidFormat(s) => write!(f, "Invalid price format: {}", s),
        }
    }
}

impl std::error::Error for PriceParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Price::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Price::parse("$149.99").unwrap().cents(), 14999);
        assert_eq!(Price::parse("0.5").unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_integer_dollars() {
        assert_eq!(Price::parse("25").unwrap().cents(), 2500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Price::parse("").is_err());
        assert!(Price::parse("abc").is_err());
        assert!(Price::parse("-5").is_err());
        assert!(Price::parse("1.5€").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_is_positive() {
        assert!(Price::from_cents(1).is_positive());
        assert!(!Price::zero().is_positive());
    }
}
