//! Application service layer.
//!
//! Services contain the business logic behind the MCP tools: the contact
//! submission pipeline and the case-study catalog. Collaborators are injected
//! as trait objects so handlers and tests never touch concrete providers.

mod catalog_service;
mod contact_submission;

pub use catalog_service::{CatalogService, CatalogServiceImpl, MAX_RELATED_LIMIT};
pub use contact_submission::{ContactSubmissionPipeline, SubmissionService};
