//! Portfolio MCP Server - contact form submission and related case-study
//! recommendations for a consulting portfolio site, served over the Model
//! Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email, phone, ids, service types)
//! - **models**: Contact requests, dispatch outcomes, submission results, catalog items
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **validation**: Contact form schema validation
//! - **email**: Email provider client, async dispatcher and message templates
//! - **audit**: Recording of failed dispatches
//! - **ranking**: Related content scoring
//! - **repositories**: Case-study catalog storage
//! - **cache**: Time-based caching
//! - **services**: Submission pipeline and catalog service
//! - **server**: MCP protocol server

pub mod audit;
pub mod cache;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod metrics;
pub mod models;
pub mod ranking;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use audit::{AuditSink, FailureRecord, TracingAuditSink};
pub use cache::TimedCache;
pub use config::{Config, ContactSettings};
pub use email::{AsyncResendDispatcher, EmailDispatcher, EmailMessage, ResendClient};
pub use error::{AuditError, CatalogError, ConfigError, DispatchError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{
    ContactRequest, ContentItem, DispatchOutcome, ErrorClassification, FieldError,
    SubmissionResult,
};
pub use ranking::{find_related, RelatedContentRanker, RelatedMatch};
pub use server::PortfolioMcpServer;
pub use services::{
    CatalogService, CatalogServiceImpl, ContactSubmissionPipeline, SubmissionService,
};
pub use validation::{ContactSchema, ContactValidator};
