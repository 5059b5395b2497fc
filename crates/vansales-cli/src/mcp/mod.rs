//! MCP server implementation for van sales
//!
//! Exposes the journey client as Model Context Protocol tools over stdio.
//! Unlike the one-shot CLI, the server keeps a single in-memory session
//! across tool calls, opened by `sign_in` and closed by `sign_out`.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use vansales_core::ApiClient;

pub mod errors;
pub mod handlers;

pub use handlers::{CompleteVisit, CustomerRef, ListJourney, McpResult, SignIn};
use handlers::{McpHandlers, McpState};

/// MCP server for the van sales journey client
#[derive(Clone)]
pub struct VanSalesMcpServer {
    state: Arc<Mutex<McpState>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VanSalesMcpServer {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: Arc::new(Mutex::new(McpState::new(client))),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.state.clone())
    }

    #[tool(
        name = "sign_in",
        description = "Sign in with the employee's username and password. Opens the session every journey tool works in; signing in again replaces the current session. Returns the user's profile."
    )]
    async fn sign_in(&self, params: Parameters<SignIn>) -> McpResult {
        self.handlers().sign_in(params).await
    }

    #[tool(
        name = "sign_out",
        description = "Sign out and discard the session and the cached journey."
    )]
    async fn sign_out(&self) -> McpResult {
        self.handlers().sign_out().await
    }

    #[tool(
        name = "list_journey",
        description = "List today's customers on the signed-in employee's current journey plan, for one tab: PENDING (default), VISITED, MISSED, ZERO SALES or UNPLANNED. Optional search filters by customer name or code, ignoring case. Shows the customer count of every tab."
    )]
    async fn list_journey(&self, params: Parameters<ListJourney>) -> McpResult {
        self.handlers().list_journey(params).await
    }

    #[tool(
        name = "show_customer",
        description = "Show a customer's details: code, stockist, sector, town, dealer and shop category, visit frequency, contact number, last and average order, and visit state."
    )]
    async fn show_customer(&self, params: Parameters<CustomerRef>) -> McpResult {
        self.handlers().show_customer(params).await
    }

    #[tool(
        name = "complete_visit",
        description = "Complete the visit to a customer. Set take_order=true when an order was taken (booked at the standard order amount); otherwise the visit is recorded with zero sales."
    )]
    async fn complete_visit(&self, params: Parameters<CompleteVisit>) -> McpResult {
        self.handlers().complete_visit(params).await
    }

    #[tool(
        name = "show_profile",
        description = "Show the signed-in user's name and role."
    )]
    async fn show_profile(&self) -> McpResult {
        self.handlers().show_profile().await
    }

    #[tool(
        name = "show_options",
        description = "Show the option lists published by the journey plan API as JSON."
    )]
    async fn show_options(&self) -> McpResult {
        self.handlers().show_options().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for VanSalesMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "vansales".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Van sales journey client for field sales employees.

## Core Concepts
- **Journey plan**: a date range of customers assigned to one employee. Only the active plan covering today is used.
- **Tabs**: the plan's customers sorted by visit status. PENDING are still to visit, VISITED are done, MISSED were never visited before the plan ended, ZERO SALES are visits without an order. UNPLANNED is always empty.

## Workflow
1. `sign_in` with the employee's credentials
2. `list_journey` to see PENDING customers, or another tab
3. `show_customer` for details
4. `complete_visit` after the visit, with take_order=true if an order was taken
5. `sign_out` when done

On the plan's first day only PENDING and VISITED list customers."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: VanSalesMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting vansales MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
