//! MCP client boundary for the arkaft-google-adk server
//!
//! Agents only depend on the [`ToolClient`] trait; the HTTP implementation
//! lives in [`http_client`] and tests substitute mocks.

pub mod http_client;

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use http_client::HttpToolClient;

/// Wraps whatever an individual analysis source call raised.
///
/// Always caught by the report compiler; a source that fails simply
/// contributes nothing to the aggregate.
#[derive(Debug, thiserror::Error)]
#[error("analysis source '{tool}' unavailable: {reason}")]
pub struct SourceUnavailableError {
    /// Tool name the source tried to call
    pub tool: String,
    /// Underlying error text
    pub reason: String,
}

impl SourceUnavailableError {
    pub fn new(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}

/// Remote tool-calling boundary.
///
/// A call either returns the tool's structured JSON payload or fails with an
/// arbitrary error; the caller decides how to degrade.
#[async_trait]
pub trait ToolClient: Send + Sync {
    /// Call a named tool with a JSON argument object
    async fn call_tool(&self, tool: &str, arguments: Value) -> Result<Value>;
}

/// Helper to extract a string array field from a payload
pub fn get_string_array(payload: &Value, field: &str) -> Vec<String> {
    payload
        .get(field)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Helper to extract a nested string array, e.g. `payload.patterns.compliant`
pub fn get_nested_string_array(payload: &Value, outer: &str, inner: &str) -> Vec<String> {
    payload
        .get(outer)
        .map(|v| get_string_array(v, inner))
        .unwrap_or_default()
}
