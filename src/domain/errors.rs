//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty or contains whitespace.
    InvalidId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The service type is not one the site offers.
    UnknownServiceType(String),

    /// The timeline is not one of the form's options.
    UnknownTimeline(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid content id: {:?}", id),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UnknownServiceType(value) => write!(f, "Unknown service type: {}", value),
            Self::UnknownTimeline(value) => write!(f, "Unknown timeline: {}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
