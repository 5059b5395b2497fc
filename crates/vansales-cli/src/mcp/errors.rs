//! Error handling utilities for MCP server

use rmcp::ErrorData;
use vansales_core::VanSalesError;

pub const NOT_SIGNED_IN: &str = "Not signed in. Call sign_in first.";

/// Helper to convert client errors to MCP errors
pub fn to_mcp_error(message: &str, error: &VanSalesError) -> ErrorData {
    match error {
        VanSalesError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

/// Error for tools that need a session when none is open
pub fn not_signed_in() -> ErrorData {
    ErrorData::invalid_request(NOT_SIGNED_IN, None)
}
