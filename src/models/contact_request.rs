//! Validated contact form submission.

use crate::domain::{EmailAddress, PhoneNumber, ServiceType, Timeline};
use serde::Serialize;

/// A contact request that passed schema validation.
///
/// Only the `validation` module can build one, so holding a `ContactRequest`
/// means every field was checked. The value is read-only and lives for a
/// single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: EmailAddress,
    pub(crate) phone: Option<PhoneNumber>,
    pub(crate) company: Option<String>,
    pub(crate) service_type: ServiceType,
    pub(crate) project_title: Option<String>,
    pub(crate) timeline: Option<Timeline>,
    pub(crate) message: String,
}

impl ContactRequest {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name joined with a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn project_title(&self) -> Option<&str> {
        self.project_title.as_deref()
    }

    pub fn timeline(&self) -> Option<Timeline> {
        self.timeline
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
