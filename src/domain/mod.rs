//! Domain value objects and types.
//!
//! Type-safe wrappers for the values a contact submission and the case-study
//! catalog are built from. Each value object validates at construction time so
//! an invalid email, phone number or enum value cannot be represented.

pub mod content_id;
pub mod email;
pub mod errors;
pub mod phone;
pub mod service_type;

pub use content_id::ContentId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use service_type::{ServiceType, Timeline};
