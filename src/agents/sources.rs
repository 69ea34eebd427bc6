//! Analysis sources: one tool call each, invoked sequentially by the compiler
//!
//! A source decides whether it applies to a subject, builds the tool
//! arguments, and returns the raw JSON payload. Errors are the compiler's
//! problem; a failed source just contributes nothing.

use super::Subject;
use crate::mcp::ToolClient;
use crate::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// One independent analysis source.
#[async_trait]
pub trait AnalysisSource: Send + Sync {
    /// Tool name, used in warnings and error wrapping
    fn name(&self) -> &str;

    /// Whether this source should run for the given subject
    fn applies(&self, subject: &Subject) -> bool {
        let _ = subject;
        true
    }

    /// Perform the tool call
    async fn analyze(&self, subject: &Subject, client: &dyn ToolClient) -> Result<Value>;
}

/// Primary code review via `review_rust_file`
pub struct ReviewFileSource {
    pub focus_areas: Vec<&'static str>,
}

impl Default for ReviewFileSource {
    fn default() -> Self {
        Self {
            focus_areas: vec![
                "translation_opportunities",
                "error_handling",
                "adk_compliance",
                "performance",
                "code_quality",
            ],
        }
    }
}

#[async_trait]
impl AnalysisSource for ReviewFileSource {
    fn name(&self) -> &str {
        "review_rust_file"
    }

    async fn analyze(&self, subject: &Subject, client: &dyn ToolClient) -> Result<Value> {
        client
            .call_tool(
                "review_rust_file",
                json!({
                    "file_content": subject.content,
                    "file_path": subject.path,
                    "focus_areas": self.focus_areas,
                }),
            )
            .await
    }
}

/// Architectural validation via `validate_architecture`
pub struct ArchitectureSource {
    pub validation_focus: Vec<String>,
    pub priority_areas: Vec<String>,
    pub check_patterns: Vec<&'static str>,
    /// When set, the source only runs if the content carries one of these
    /// markers
    pub required_markers: Option<Vec<&'static str>>,
}

impl ArchitectureSource {
    /// Conditional variant used by the code review agent: only runs when the
    /// file shows architectural structure
    pub fn when_architectural() -> Self {
        Self {
            validation_focus: vec![
                "component_organization".into(),
                "dependency_management".into(),
                "separation_of_concerns".into(),
                "adk_patterns".into(),
            ],
            priority_areas: vec![],
            check_patterns: vec![
                "component_organization",
                "dependency_management",
                "separation_of_concerns",
                "adk_patterns",
                "interface_design",
            ],
            required_markers: Some(vec![
                "impl", "trait", "struct", "enum", "mod", "pub struct", "pub trait",
            ]),
        }
    }
}

#[async_trait]
impl AnalysisSource for ArchitectureSource {
    fn name(&self) -> &str {
        "validate_architecture"
    }

    fn applies(&self, subject: &Subject) -> bool {
        match &self.required_markers {
            Some(markers) => subject.has_any_marker(markers),
            None => true,
        }
    }

    async fn analyze(&self, subject: &Subject, client: &dyn ToolClient) -> Result<Value> {
        client
            .call_tool(
                "validate_architecture",
                json!({
                    "file_content": subject.content,
                    "file_path": subject.path,
                    "validation_focus": self.validation_focus,
                    "priority_areas": self.priority_areas,
                    "project_context": subject.context,
                    "check_patterns": self.check_patterns,
                }),
            )
            .await
    }
}

/// Dependency-focused `validate_architecture` pass.
///
/// Only runs when the subject affects dependency management.
pub struct DependencyAnalysisSource;

#[async_trait]
impl AnalysisSource for DependencyAnalysisSource {
    fn name(&self) -> &str {
        "validate_architecture (dependencies)"
    }

    fn applies(&self, subject: &Subject) -> bool {
        subject.path.ends_with("Cargo.toml") || subject.content.to_lowercase().contains("dependencies")
    }

    async fn analyze(&self, subject: &Subject, client: &dyn ToolClient) -> Result<Value> {
        client
            .call_tool(
                "validate_architecture",
                json!({
                    "file_content": subject.content,
                    "file_path": subject.path,
                    "validation_focus": ["dependency_analysis"],
                    "check_patterns": [
                        "dependency_management",
                        "version_compatibility",
                        "circular_dependencies",
                        "adk_dependency_patterns",
                    ],
                }),
            )
            .await
    }
}

/// Scenario-based recommendations via `get_best_practices`
pub struct BestPracticesSource {
    pub scenario: String,
    pub context: Value,
}

#[async_trait]
impl AnalysisSource for BestPracticesSource {
    fn name(&self) -> &str {
        "get_best_practices"
    }

    async fn analyze(&self, _subject: &Subject, client: &dyn ToolClient) -> Result<Value> {
        client
            .call_tool(
                "get_best_practices",
                json!({
                    "scenario": self.scenario,
                    "context": self.context,
                }),
            )
            .await
    }
}

/// Free-form documentation query via `adk_query`
pub struct AdkQuerySource {
    pub query: String,
    pub context: Value,
}

#[async_trait]
impl AnalysisSource for AdkQuerySource {
    fn name(&self) -> &str {
        "adk_query"
    }

    async fn analyze(&self, _subject: &Subject, client: &dyn ToolClient) -> Result<Value> {
        client
            .call_tool(
                "adk_query",
                json!({
                    "query": self.query,
                    "context": self.context,
                }),
            )
            .await
    }
}
