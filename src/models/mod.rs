//! Data models for contact submissions and the case-study catalog.

pub mod contact_request;
pub mod content_item;
pub mod submission;

pub use contact_request::ContactRequest;
pub use content_item::ContentItem;
pub use submission::{
    DispatchFailure, DispatchOutcome, ErrorClassification, FieldError, MessageKind,
    SubmissionResult, DELAYED_RESPONSE_WINDOW, RESPONSE_WINDOW,
};
