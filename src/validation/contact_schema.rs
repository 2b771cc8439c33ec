//! Rules for the public contact form.

use super::{ContactValidator, FieldViolation, SchemaError};
use crate::domain::{EmailAddress, PhoneNumber, ServiceType, Timeline};
use crate::models::ContactRequest;
use serde_json::{Map, Value};

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_COMPANY_LEN: usize = 100;
pub const MAX_PROJECT_TITLE_LEN: usize = 150;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Validator for the camelCase JSON the contact form posts.
///
/// Every field is checked and all violations are reported together, in form
/// order. Strings are trimmed and blank optional fields count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSchema;

impl ContactSchema {
    pub fn new() -> Self {
        Self
    }
}

impl ContactValidator for ContactSchema {
    fn parse(&self, raw: &Value) -> Result<ContactRequest, SchemaError> {
        let Some(object) = raw.as_object() else {
            return Err(SchemaError::Violations(vec![FieldViolation::new(
                Vec::<String>::new(),
                "Expected an object",
            )]));
        };

        let mut form = FormReader::new(object);

        let first_name = form.required("firstName", "First name", MAX_NAME_LEN);
        let last_name = form.required("lastName", "Last name", MAX_NAME_LEN);

        let email = form
            .required("email", "Email", usize::MAX)
            .and_then(|value| match EmailAddress::new(value) {
                Ok(email) => Some(email),
                Err(_) => {
                    form.violate("email", "Please enter a valid email address");
                    None
                }
            });

        let phone = form.optional("phone", "Phone", usize::MAX).and_then(|value| {
            match PhoneNumber::new(value) {
                Ok(phone) => Some(phone),
                Err(_) => {
                    form.violate("phone", "Please enter a valid phone number");
                    None
                }
            }
        });

        let company = form.optional("company", "Company", MAX_COMPANY_LEN);

        let service_type = form
            .required("serviceType", "Service type", usize::MAX)
            .and_then(|value| match value.parse::<ServiceType>() {
                Ok(service) => Some(service),
                Err(_) => {
                    form.violate("serviceType", "Please select a valid service");
                    None
                }
            });

        let project_title = form.optional("projectTitle", "Project title", MAX_PROJECT_TITLE_LEN);

        let timeline = form
            .optional("timeline", "Timeline", usize::MAX)
            .and_then(|value| match value.parse::<Timeline>() {
                Ok(timeline) => Some(timeline),
                Err(_) => {
                    form.violate("timeline", "Please select a valid timeline");
                    None
                }
            });

        let message = form.required("message", "Message", MAX_MESSAGE_LEN);

        if !form.violations.is_empty() {
            return Err(SchemaError::Violations(form.violations));
        }

        let (Some(first_name), Some(last_name), Some(email), Some(service_type), Some(message)) =
            (first_name, last_name, email, service_type, message)
        else {
            return Err(SchemaError::Internal(
                "required field missing without a recorded violation".to_string(),
            ));
        };

        Ok(ContactRequest {
            first_name,
            last_name,
            email,
            phone,
            company,
            service_type,
            project_title,
            timeline,
            message,
        })
    }
}

enum RawField {
    Missing,
    Text(String),
    WrongType,
}

/// Reads fields from the form object and collects violations.
struct FormReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FormReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            violations: Vec::new(),
        }
    }

    fn raw(&self, key: &str) -> RawField {
        match self.object.get(key) {
            None | Some(Value::Null) => RawField::Missing,
            Some(Value::String(value)) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    RawField::Missing
                } else {
                    RawField::Text(trimmed.to_string())
                }
            }
            Some(_) => RawField::WrongType,
        }
    }

    fn violate(&mut self, key: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new([key], message));
    }

    fn required(&mut self, key: &str, label: &str, max_len: usize) -> Option<String> {
        match self.raw(key) {
            RawField::Text(value) => self.within_limit(key, label, value, max_len),
            RawField::Missing => {
                self.violate(key, format!("{} is required", label));
                None
            }
            RawField::WrongType => {
                self.violate(key, "Expected a string");
                None
            }
        }
    }

    fn optional(&mut self, key: &str, label: &str, max_len: usize) -> Option<String> {
        match self.raw(key) {
            RawField::Text(value) => self.within_limit(key, label, value, max_len),
            RawField::Missing => None,
            RawField::WrongType => {
                self.violate(key, "Expected a string");
                None
            }
        }
    }

    fn within_limit(
        &mut self,
        key: &str,
        label: &str,
        value: String,
        max_len: usize,
    ) -> Option<String> {
        if value.chars().count() > max_len {
            self.violate(
                key,
                format!("{} must be {} characters or fewer", label, max_len),
            );
            None
        } else {
            Some(value)
        }
    }
}
