//! Service type and project timeline enums offered by the contact form.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of inquiry a contact submission is filed under.
///
/// Form values are kebab-case (`web-development`); the catalog stores the
/// same categories in snake_case (`web_development`), so both spellings parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[serde(alias = "tender_management")]
    TenderManagement,
    #[serde(alias = "project_management")]
    ProjectManagement,
    #[serde(alias = "web_development")]
    WebDevelopment,
    Consultation,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::TenderManagement,
        ServiceType::ProjectManagement,
        ServiceType::WebDevelopment,
        ServiceType::Consultation,
    ];

    /// Wire value used by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenderManagement => "tender-management",
            Self::ProjectManagement => "project-management",
            Self::WebDevelopment => "web-development",
            Self::Consultation => "consultation",
        }
    }

    /// Human-readable label used in email subjects and bodies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TenderManagement => "Tender Management",
            Self::ProjectManagement => "Project Management",
            Self::WebDevelopment => "Web Development",
            Self::Consultation => "General Consultation",
        }
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownServiceType(s.to_string()))
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon the requester wants the project to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Urgent,
    Month,
    Quarter,
    Flexible,
    Discuss,
}

impl Timeline {
    pub const ALL: [Timeline; 5] = [
        Timeline::Urgent,
        Timeline::Month,
        Timeline::Quarter,
        Timeline::Flexible,
        Timeline::Discuss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Flexible => "flexible",
            Self::Discuss => "discuss",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent (ASAP)",
            Self::Month => "Within a month",
            Self::Quarter => "Within 3 months",
            Self::Flexible => "Flexible",
            Self::Discuss => "Let's discuss",
        }
    }
}

impl FromStr for Timeline {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|timeline| timeline.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownTimeline(s.to_string()))
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
