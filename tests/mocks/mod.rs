pub mod mock_audit_sink;
pub mod mock_content_repository;
pub mod mock_email_dispatcher;

#[allow(unused_imports)]
pub use mock_audit_sink::MockAuditSink;
#[allow(unused_imports)]
pub use mock_content_repository::MockContentRepository;
#[allow(unused_imports)]
pub use mock_email_dispatcher::MockEmailDispatcher;
