//! Portfolio MCP Server - Main entry point
//!
//! Wires the email provider, validator, audit sink and catalog into the MCP
//! server and serves it over stdio.

use anyhow::Result;
use portfolio_mcp_server::repositories::{ContentRepository, JsonContentRepository};
use portfolio_mcp_server::{
    AsyncResendDispatcher, AuditSink, CatalogService, CatalogServiceImpl, Config,
    ContactSchema, ContactSubmissionPipeline, ContactValidator, EmailDispatcher, Metrics,
    PortfolioMcpServer, ResendClient, SubmissionService, TracingAuditSink,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Portfolio MCP Server with email API URL: {}",
        config.email_api_url
    );

    let metrics = Metrics::new();

    let dispatcher = Arc::new(AsyncResendDispatcher::new(ResendClient::new(
        &config,
        metrics.clone(),
    ))) as Arc<dyn EmailDispatcher>;
    let validator = Arc::new(ContactSchema::new()) as Arc<dyn ContactValidator>;
    let audit = Arc::new(TracingAuditSink::new()) as Arc<dyn AuditSink>;

    let submission_service = Arc::new(ContactSubmissionPipeline::new(
        validator,
        dispatcher,
        audit,
        config.contact_settings(),
        metrics,
    )) as Arc<dyn SubmissionService>;

    let content_repo = Arc::new(JsonContentRepository::new(config.case_studies_path.clone()))
        as Arc<dyn ContentRepository>;
    let catalog_service = Arc::new(
        CatalogServiceImpl::new(content_repo, config.catalog_cache_ttl())
            .with_default_max_results(config.max_related_results),
    ) as Arc<dyn CatalogService>;

    let server = PortfolioMcpServer::new(submission_service, catalog_service);

    info!(
        "Catalog: {} (cache TTL {} minutes)",
        config.case_studies_path.display(),
        config.catalog_cache_ttl_minutes
    );

    info!("Starting MCP server with stdio transport");
    portfolio_mcp_server::server::run_server(server).await?;

    info!("Portfolio MCP Server shutdown complete");
    Ok(())
}
