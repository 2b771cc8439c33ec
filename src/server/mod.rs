//! MCP server for the portfolio site.
//!
//! Exposes contact form submission and the case-study catalog to AI
//! assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::{PortfolioMcpServer, SubmitContactParams};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server over stdin/stdout until the client disconnects.
pub async fn run_server(server: PortfolioMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
