//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// An optional contact phone number as typed into the form.
///
/// The original formatting is kept for display in the notification email.
/// Validation only checks the character set and the digit count (E.164 allows
/// at most 15 digits).
///
/// # Example
///
/// ```
/// use portfolio_mcp_server::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+44 (20) 7946 0958").unwrap();
/// assert_eq!(phone.as_str(), "+44 (20) 7946 0958");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the number contains
    /// characters other than digits, spaces, `+`, `-`, `(`, `)`, `.`, or has
    /// fewer than 7 or more than 15 digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        let allowed = trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));
        let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();

        if !allowed || !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
