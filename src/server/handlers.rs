//! MCP tool handlers for the portfolio server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::services::{CatalogService, SubmissionService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing the contact form and the case-study catalog.
#[derive(Clone)]
pub struct PortfolioMcpServer {
    submission_service: Arc<dyn SubmissionService>,
    catalog_service: Arc<dyn CatalogService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for PortfolioMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "portfolio-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a consulting portfolio - accepts contact form submissions and serves case studies with related-content recommendations.".into()),
        }
    }
}

/// Raw contact form fields. Values are taken as untyped JSON so that missing
/// or mistyped fields reach the submission pipeline and come back as field
/// errors instead of a protocol error.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Value>,
    /// One of consultation, tender-management, web-development, project-management
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<Value>,
    /// One of urgent, month, quarter, flexible, discuss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListCaseStudiesParams {
    #[serde(default)]
    service_type: Option<String>,
    #[serde(default)]
    featured_only: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CaseStudyIdParams {
    id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FindRelatedParams {
    id: String,
    #[serde(default)]
    max_results: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_text<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

#[tool_router]
impl PortfolioMcpServer {
    /// Create a new portfolio MCP server.
    pub fn new(
        submission_service: Arc<dyn SubmissionService>,
        catalog_service: Arc<dyn CatalogService>,
    ) -> Self {
        Self {
            submission_service,
            catalog_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Submit a contact form.
    #[tool(
        description = "Submit a contact form inquiry. Validates the fields, notifies the site owner and sends an acknowledgment to the requester. Returns success, partial success with a warning, field errors, or a classified failure."
    )]
    async fn submit_contact_form(
        &self,
        params: Parameters<SubmitContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let raw = serde_json::to_value(&params.0).map_err(to_mcp_error)?;

        tracing::info!("MCP Handler: submit_contact_form called");
        let result = self.submission_service.submit(&raw).await;
        tracing::debug!(
            "Submission finished: success={}, error_type={:?}",
            result.success,
            result.error_type
        );

        json_text(&result)
    }

    /// List case studies.
    #[tool(
        description = "List case studies, optionally filtered by service type and/or featured status"
    )]
    async fn list_case_studies(
        &self,
        params: Parameters<ListCaseStudiesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let items = self
            .catalog_service
            .list_case_studies(
                params.service_type.as_deref(),
                params.featured_only.unwrap_or(false),
            )
            .await
            .map_err(to_mcp_error)?;

        json_text(&serde_json::json!({
            "count": items.len(),
            "case_studies": items,
        }))
    }

    #[tool(description = "Retrieve a single case study by ID")]
    async fn get_case_study(
        &self,
        params: Parameters<CaseStudyIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let item = self
            .catalog_service
            .get_case_study(&params.0.id)
            .await
            .map_err(to_mcp_error)?;

        json_text(&item)
    }

    /// Related case studies for the one being viewed.
    #[tool(
        description = "Find case studies related to the given one, ranked by shared service type, category, client, skills and technologies. Returns at most max_results items (default 3) with their scores."
    )]
    async fn find_related_case_studies(
        &self,
        params: Parameters<FindRelatedParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let related = self
            .catalog_service
            .find_related(&params.id, params.max_results)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find related case studies: {:?}", e);
                to_mcp_error(e)
            })?;

        json_text(&serde_json::json!({
            "id": params.id,
            "result_count": related.len(),
            "related": related,
        }))
    }
}
