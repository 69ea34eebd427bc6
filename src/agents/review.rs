//! Code review agent
//!
//! Reviews a Rust file for ADK compliance: primary `review_rust_file` pass,
//! a `validate_architecture` pass when the file shows architectural
//! structure, and scenario-based best practices.

use super::sources::{
    AnalysisSource, ArchitectureSource, BestPracticesSource, ReviewFileSource,
};
use super::Subject;
use crate::mcp::ToolClient;
use crate::models::AggregateReport;
use crate::report::{compile, AgentProfile};
use serde_json::json;

pub struct CodeReviewAgent<'a> {
    client: &'a dyn ToolClient,
}

impl<'a> CodeReviewAgent<'a> {
    pub fn new(client: &'a dyn ToolClient) -> Self {
        Self { client }
    }

    /// Review a file and compile the aggregate result.
    ///
    /// Never fails; a degraded report is returned when the server is
    /// unreachable.
    pub async fn review_file(&self, subject: &Subject) -> AggregateReport {
        let profile = AgentProfile::new("ADK Code Review Results", "Reviewed");

        let sources: Vec<Box<dyn AnalysisSource>> = vec![
            Box::new(ReviewFileSource::default()),
            Box::new(ArchitectureSource::when_architectural()),
            Box::new(BestPracticesSource {
                scenario: best_practices_scenario(&subject.path).to_string(),
                context: json!({
                    "file_type": file_type(&subject.path),
                }),
            }),
        ];

        compile(&profile, subject, &sources, self.client).await
    }
}

/// Best practices scenario derived from the file path
fn best_practices_scenario(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    if lower.contains("service") {
        "service_implementation"
    } else if lower.contains("component") {
        "component_development"
    } else if lower.contains("model") || lower.contains("entity") {
        "data_modeling"
    } else if path.ends_with("lib.rs") || path.ends_with("main.rs") {
        "application_structure"
    } else {
        "general_development"
    }
}

/// Coarse file classification passed along as tool context
fn file_type(path: &str) -> &'static str {
    if path.ends_with("lib.rs") {
        "library"
    } else if path.ends_with("main.rs") {
        "binary"
    } else if path.contains("test") {
        "test"
    } else if path.contains("example") {
        "example"
    } else {
        "module"
    }
}
