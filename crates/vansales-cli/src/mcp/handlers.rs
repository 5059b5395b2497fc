//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use vansales_core::{
    display::{Profile, SignOutNotice, VisitResult},
    journey::JourneyBoard,
    models::CalendarDay,
    params as core,
    ApiClient, Session, VanSalesError,
};

use super::errors::{not_signed_in, to_mcp_error};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container so the MCP
// layer can add JsonSchema without touching the core types.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type SignIn = McpParams<core::SignIn>;
pub type ListJourney = McpParams<core::ListJourney>;
pub type CustomerRef = McpParams<core::CustomerRef>;
pub type CompleteVisit = McpParams<core::CompleteVisit>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// State shared by every tool call of one server.
///
/// Holds at most one session. The board keeps the latest journey load so a
/// slow refresh that finishes after a newer one cannot overwrite it.
pub struct McpState {
    client: ApiClient,
    session: Option<Session>,
    board: JourneyBoard,
}

impl McpState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: None,
            board: JourneyBoard::default(),
        }
    }
}

fn text(output: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    state: Arc<Mutex<McpState>>,
}

impl McpHandlers {
    pub fn new(state: Arc<Mutex<McpState>>) -> Self {
        Self { state }
    }

    async fn client(&self) -> ApiClient {
        self.state.lock().await.client.clone()
    }

    pub async fn sign_in(&self, Parameters(params): Parameters<SignIn>) -> McpResult {
        debug!("sign_in: {:?}", params);

        params
            .as_ref()
            .validate()
            .map_err(|e| to_mcp_error("Invalid credentials", &e))?;

        let session = self
            .client()
            .await
            .sign_in(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Sign-in failed", &e))?;
        let output = format!("Signed in\n\n{}", Profile(session.user()));

        let mut state = self.state.lock().await;
        if let Some(previous) = state.session.replace(session) {
            previous.sign_out();
        }
        state.board.clear();

        text(output)
    }

    pub async fn sign_out(&self) -> McpResult {
        debug!("sign_out");

        let mut state = self.state.lock().await;
        state.board.clear();
        let notice = match state.session.take() {
            Some(session) => SignOutNotice::SignedOut(session.sign_out()),
            None => SignOutNotice::NotSignedIn,
        };

        text(notice.to_string())
    }

    pub async fn list_journey(&self, Parameters(params): Parameters<ListJourney>) -> McpResult {
        debug!("list_journey: {:?}", params);

        let (client, session, ticket) = {
            let mut state = self.state.lock().await;
            let session = state.session.clone().ok_or_else(not_signed_in)?;
            let ticket = state.board.begin_refresh();
            (state.client.clone(), session, ticket)
        };

        let today = CalendarDay::today();
        let snapshot = client
            .load_journey(&session, &today)
            .await
            .map_err(|e| to_mcp_error("Failed to load data", &e))?;

        let mut state = self.state.lock().await;
        if !state.board.commit(ticket, snapshot) {
            if state.board.is_latest(ticket) {
                debug!(
                    "list_journey: refresh {} discarded by sign-in or sign-out",
                    ticket.generation()
                );
            } else {
                debug!(
                    "list_journey: refresh {} superseded by a newer one",
                    ticket.generation()
                );
            }
        }
        let params = params.as_ref();
        let view = state
            .board
            .view(&today, &params.tab(), params.query())
            .ok_or_else(not_signed_in)?;

        text(view.to_string())
    }

    pub async fn show_customer(&self, Parameters(params): Parameters<CustomerRef>) -> McpResult {
        debug!("show_customer: {:?}", params);

        let id = params
            .as_ref()
            .customer_id()
            .map_err(|e| to_mcp_error("Invalid customer", &e))?;

        let customer = self
            .client()
            .await
            .find_customer(&id)
            .await
            .map_err(|e| match e {
                VanSalesError::CustomerNotFound { .. } => {
                    ErrorData::invalid_params(format!("Customer not found: {e}"), None)
                }
                other => to_mcp_error("Failed to load data", &other),
            })?;

        text(customer.to_string())
    }

    pub async fn complete_visit(
        &self,
        Parameters(params): Parameters<CompleteVisit>,
    ) -> McpResult {
        debug!("complete_visit: {:?}", params);

        let params = params.as_ref();
        let id = params
            .customer_id()
            .map_err(|e| to_mcp_error("Invalid customer", &e))?;
        let outcome = params.outcome();

        let customer = self
            .client()
            .await
            .complete_visit(&id, outcome)
            .await
            .map_err(|e| to_mcp_error("Failed to complete visit", &e))?;

        text(VisitResult::new(customer, outcome).to_string())
    }

    pub async fn show_profile(&self) -> McpResult {
        debug!("show_profile");

        let state = self.state.lock().await;
        let session = state.session.as_ref().ok_or_else(not_signed_in)?;

        text(Profile(session.user()).to_string())
    }

    pub async fn show_options(&self) -> McpResult {
        debug!("show_options");

        let options = self
            .client()
            .await
            .options()
            .await
            .map_err(|e| to_mcp_error("Failed to load options", &e))?;

        text(options.to_pretty_json())
    }
}
