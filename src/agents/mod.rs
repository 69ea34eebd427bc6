//! Agent wrappers for the arkaft-google-adk MCP server tools
//!
//! Each agent inspects a [`Subject`], issues a fixed sequence of tool calls
//! through the shared report compiler, and returns an
//! [`AggregateReport`](crate::models::AggregateReport).

pub mod architecture;
pub mod assistant;
pub mod docs;
pub mod review;
pub mod sources;

pub use architecture::ArchitectureAgent;
pub use assistant::{AssistanceType, ProjectAssistantAgent};
pub use docs::{DocsAgent, DocsContext};
pub use review::CodeReviewAgent;

use serde_json::Value;

/// The thing under analysis: a file path, its content, and whatever project
/// context the caller supplies.
#[derive(Debug, Clone)]
pub struct Subject {
    /// File path, or a synthetic identifier for non-file subjects
    pub path: String,
    /// Content under analysis
    pub content: String,
    /// Caller-supplied project context, passed through to tools
    pub context: Value,
}

impl Subject {
    pub fn new(path: impl Into<String>, content: impl Into<String>, context: Value) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            context,
        }
    }

    /// Last path component, used in summaries
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// True if the content contains any of the given marker substrings
    pub fn has_any_marker(&self, markers: &[&str]) -> bool {
        markers.iter().any(|m| self.content.contains(m))
    }
}
