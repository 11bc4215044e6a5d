//! Payment method model
//!
//! Card details collected on the final creator step. Format checks run
//! client-side before the card is handed to the payment gateway.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment card as entered in the payment form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    /// Card number, possibly with grouping spaces
    pub card_number: String,

    /// Expiry in MM/YY form
    pub expiry: String,

    /// Card verification value
    pub cvv: String,

    /// Name printed on the card
    pub name_on_card: String,
}

impl PaymentCard {
    /// Digits of the card number with grouping spaces stripped
    pub fn digits(&self) -> String {
        self.card_number.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Last four digits for display ("•••• 4242")
    pub fn masked(&self) -> String {
        let digits = self.digits();
        let tail = if digits.len() >= 4 {
            &digits[digits.len() - 4..]
        } else {
            digits.as_str()
        };
        format!("•••• {}", tail)
    }

    /// Validate the card fields
    pub fn validate(&self) -> Result<(), PaymentCardError> {
        let digits = self.digits();
        if digits.len() != 16 {
            return Err(PaymentCardError::InvalidCardNumber);
        }

        let (month, year) = self
            .expiry
            .split_once('/')
            .ok_or(PaymentCardError::InvalidExpiry)?;
        let month: u32 = month.parse().map_err(|_| PaymentCardError::InvalidExpiry)?;
        if !(1..=12).contains(&month) || year.len() != 2 || year.parse::<u32>().is_err() {
            return Err(PaymentCardError::InvalidExpiry);
        }

        if self.cvv.len() < 3 || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentCardError::InvalidCvv);
        }

        if self.name_on_card.trim().is_empty() {
            return Err(PaymentCardError::MissingName);
        }

        Ok(())
    }

    /// Re-format raw card-number input: digits only, a space after every
    /// four, capped at 16 digits
    pub fn format_card_number(input: &str) -> String {
        let digits: String = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(16)
            .collect();

        let mut formatted = String::with_capacity(19);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                formatted.push(' ');
            }
            formatted.push(c);
        }
        formatted
    }

    /// Re-format raw expiry input: digits only, a slash after the month,
    /// capped at MM/YY
    pub fn format_expiry(input: &str) -> String {
        let digits: String = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(4)
            .collect();

        if digits.len() >= 2 {
            format!("{}/{}", &digits[..2], &digits[2..])
        } else {
            digits
        }
    }
}

/// Validation errors for payment cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCardError {
    InvalidCardNumber,
    InvalidExpiry,
    InvalidCvv,
    MissingName,
}

impl fmt::Display for PaymentCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCardNumber => write!(f, "Card number must be 16 digits"),
            Self::InvalidExpiry => write!(f, "Enter expiry date in MM/YY format"),
            Self::InvalidCvv => write!(f, "Enter a valid CVV code"),
            Self::MissingName => write!(f, "Enter the name on the card"),
        }
    }
}

impl std::error::Error for PaymentCardError {}
