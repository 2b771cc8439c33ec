mod json_content_repository;
mod traits;

pub use json_content_repository::JsonContentRepository;
pub use traits::ContentRepository;
