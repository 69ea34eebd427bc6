// ADK Agents - MCP-backed analysis agents for Google ADK projects
// Wraps the arkaft-google-adk MCP server tools behind typed aggregate reports

pub mod agents;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod models;
pub mod report;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use agents::{ArchitectureAgent, CodeReviewAgent, DocsAgent, ProjectAssistantAgent, Subject};
pub use models::{AggregateReport, ComplianceLevel, Finding, Priority};
pub use report::render_report;
