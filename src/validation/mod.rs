//! Schema validation for raw contact form input.
//!
//! The contact pipeline depends on the [`ContactValidator`] trait rather than
//! on [`ContactSchema`] directly so a different validator (or a test double)
//! can be supplied at construction time.

pub mod contact_schema;

pub use contact_schema::{
    ContactSchema, MAX_COMPANY_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_PROJECT_TITLE_LEN,
};

use crate::models::{ContactRequest, FieldError};
use serde_json::Value;
use thiserror::Error;

/// Field name used for violations that are not tied to a specific field.
pub const FORM_FIELD: &str = "form";

/// A single schema violation at `path` (e.g. `["firstName"]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: Vec<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn new<P, S>(path: P, message: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Dot-joined path, or `form` for a whole-input violation.
    pub fn field(&self) -> String {
        if self.path.is_empty() {
            FORM_FIELD.to_string()
        } else {
            self.path.join(".")
        }
    }
}

impl From<FieldViolation> for FieldError {
    fn from(violation: FieldViolation) -> Self {
        FieldError {
            field: violation.field(),
            message: violation.message,
        }
    }
}

/// Why raw input could not be turned into a [`ContactRequest`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The input broke one or more rules.
    #[error("{} field(s) failed validation", .0.len())]
    Violations(Vec<FieldViolation>),

    /// The validator itself failed; the input was not judged.
    #[error("Validator failed: {0}")]
    Internal(String),
}

impl SchemaError {
    /// Flatten into the field-error list returned to the form.
    ///
    /// An internal failure becomes a single error on the `form` field so the
    /// caller always receives the same shape.
    pub fn into_field_errors(self) -> Vec<FieldError> {
        match self {
            Self::Violations(violations) => violations.into_iter().map(FieldError::from).collect(),
            Self::Internal(_) => vec![FieldError {
                field: FORM_FIELD.to_string(),
                message: "We couldn't process your submission. Please review the form and try again."
                    .to_string(),
            }],
        }
    }
}

/// Turns untyped form input into a validated [`ContactRequest`].
///
/// Validation is all-or-nothing: either every rule passes and a request is
/// returned, or no request exists.
pub trait ContactValidator: Send + Sync {
    fn parse(&self, raw: &Value) -> Result<ContactRequest, SchemaError>;
}
