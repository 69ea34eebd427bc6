//! HTTP transport for MCP tool calls
//!
//! Speaks JSON-RPC 2.0 `tools/call` against a streamable-HTTP MCP endpoint.
//! Text content blocks that themselves contain JSON are unwrapped so agents
//! always see the tool's structured payload.

use super::ToolClient;
use crate::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// MCP client over HTTP
pub struct HttpToolClient {
    endpoint: String,
    server_name: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpToolClient {
    /// Create a client for the given endpoint, e.g. `http://127.0.0.1:3100/mcp`
    pub fn new(
        endpoint: impl Into<String>,
        server_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.into(),
            server_name: server_name.into(),
            client,
            next_id: AtomicU64::new(1),
        })
    }

    /// Name of the MCP server this client targets
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Unwrap an MCP tool result into the tool's structured payload.
    ///
    /// Servers respond with either a bare object or a `content` array whose
    /// first text block holds the JSON payload.
    fn unwrap_payload(result: Value) -> Value {
        let text = result
            .get("content")
            .and_then(|c| c.as_array())
            .and_then(|blocks| blocks.first())
            .and_then(|block| block.get("text"))
            .and_then(|t| t.as_str());

        match text {
            Some(text) => serde_json::from_str(text).unwrap_or_else(|_| json!({"text": text})),
            None => result,
        }
    }
}

#[async_trait]
impl ToolClient for HttpToolClient {
    async fn call_tool(&self, tool: &str, arguments: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {
                "name": tool,
                "arguments": arguments
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .with_context(|| {
                format!(
                    "MCP server '{}' unreachable at {}",
                    self.server_name, self.endpoint
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "MCP server '{}' returned HTTP {} for tool '{}'",
                self.server_name,
                status,
                tool
            );
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse MCP response body")?;

        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            anyhow::bail!("Tool '{}' failed: {}", tool, message);
        }

        let result = body
            .get("result")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("MCP response missing 'result' for tool '{}'", tool))?;

        Ok(Self::unwrap_payload(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_payload_bare_object() {
        let result = json!({"findings": []});
        assert_eq!(
            HttpToolClient::unwrap_payload(result.clone()),
            json!({"findings": []})
        );
    }

    #[test]
    fn test_unwrap_payload_content_block() {
        let result = json!({
            "content": [{"type": "text", "text": "{\"findings\": [], \"references\": [\"ADK Guide\"]}"}]
        });
        let payload = HttpToolClient::unwrap_payload(result);
        assert_eq!(payload["references"][0], "ADK Guide");
    }

    #[test]
    fn test_unwrap_payload_non_json_text() {
        let result = json!({"content": [{"type": "text", "text": "plain answer"}]});
        let payload = HttpToolClient::unwrap_payload(result);
        assert_eq!(payload["text"], "plain answer");
    }

    #[test]
    fn test_client_creation() {
        let client = HttpToolClient::new(
            "http://127.0.0.1:3100/mcp",
            "arkaft-google-adk",
            Duration::from_secs(30),
        );
        assert!(client.is_ok());
    }
}
