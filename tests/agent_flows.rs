//! End-to-end agent flows against a mock MCP client

use adk_agents::agents::{
    ArchitectureAgent, AssistanceType, CodeReviewAgent, DocsAgent, DocsContext,
    ProjectAssistantAgent, Subject,
};
use adk_agents::mcp::ToolClient;
use adk_agents::models::{ComplianceLevel, Priority};
use adk_agents::report::render_report;
use adk_agents::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Mock MCP client: queued responses per tool, plus a call log
struct MockClient {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    fail_all: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            fail_all: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            fail_all: Some(reason.to_string()),
            ..Self::new()
        }
    }

    fn respond(self, tool: &str, payload: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(tool.to_string())
            .or_default()
            .push_back(payload);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolClient for MockClient {
    async fn call_tool(&self, tool: &str, _arguments: Value) -> Result<Value> {
        self.calls.lock().unwrap().push(tool.to_string());
        if let Some(reason) = &self.fail_all {
            anyhow::bail!("{}", reason);
        }
        let payload = self
            .responses
            .lock()
            .unwrap()
            .get_mut(tool)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| json!({}));
        Ok(payload)
    }
}

fn rust_subject() -> Subject {
    Subject::new(
        "src/user_service.rs",
        "pub struct UserService;\nimpl UserService { pub fn get(&self) {} }",
        json!({"project_type": "adk"}),
    )
}

#[tokio::test]
async fn review_merges_findings_in_source_order() {
    // Three sources answer in call order: review [High], architecture [],
    // best practices [Critical]
    let client = MockClient::new()
        .respond(
            "review_rust_file",
            json!({
                "findings": [{
                    "priority": "High",
                    "title": "Translation Support Missing",
                    "location": "Lines 45-52"
                }],
                "references": ["ADK Translation Guide"]
            }),
        )
        .respond("validate_architecture", json!({"findings": []}))
        .respond(
            "get_best_practices",
            json!({
                "findings": [{"priority": "Critical", "title": "Blocking Issue"}],
                "references": ["ADK Translation Guide", "ADK Error Handling Best Practices"]
            }),
        );

    let report = CodeReviewAgent::new(&client).review_file(&rust_subject()).await;

    assert!(!report.degraded);
    assert_eq!(report.findings.len(), 2);
    assert_eq!(report.findings[0].title, "Translation Support Missing");
    assert_eq!(report.findings[1].title, "Blocking Issue");
    assert_eq!(report.overall_priority, Priority::Critical);
    assert_eq!(report.compliance, ComplianceLevel::NonCompliant);
    assert!(report.summary.contains("2 finding(s)"));

    // References deduplicated, first-seen order preserved
    assert_eq!(
        report.references,
        vec!["ADK Translation Guide", "ADK Error Handling Best Practices"]
    );

    // Conditional architecture pass ran because the file declares a struct
    assert_eq!(
        client.calls(),
        vec!["review_rust_file", "validate_architecture", "get_best_practices"]
    );
}

#[tokio::test]
async fn review_skips_architecture_pass_without_markers() {
    let client = MockClient::new();
    let subject = Subject::new("notes.rs", "fn helper() {}", json!({}));

    let report = CodeReviewAgent::new(&client).review_file(&subject).await;

    assert!(!client.calls().contains(&"validate_architecture".to_string()));
    assert_eq!(report.compliance, ComplianceLevel::Excellent);
}

#[tokio::test]
async fn review_all_sources_failing_goes_degraded() {
    let client = MockClient::failing("connection refused");

    let report = CodeReviewAgent::new(&client).review_file(&rust_subject()).await;

    assert!(report.degraded);
    assert_eq!(report.compliance, ComplianceLevel::Unknown);
    assert!(report.summary.contains("connection refused"));
    assert_eq!(
        report.action_items,
        vec!["Retry analysis when the MCP server is available"]
    );

    // Distinguishable from the all-succeed-zero-findings case
    let clean = MockClient::new();
    let clean_report = CodeReviewAgent::new(&clean).review_file(&rust_subject()).await;
    assert_eq!(clean_report.compliance, ComplianceLevel::Excellent);
    assert_ne!(report.compliance.label(), clean_report.compliance.label());
}

#[tokio::test]
async fn review_tolerates_partial_source_failure() {
    // Only the primary tool answers; the rest return empty payloads
    let client = MockClient::new().respond(
        "review_rust_file",
        json!({"findings": [{"priority": "Medium", "title": "Minor Issue"}]}),
    );

    let report = CodeReviewAgent::new(&client).review_file(&rust_subject()).await;

    assert!(!report.degraded);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.compliance, ComplianceLevel::Good);
}

#[tokio::test]
async fn architecture_report_carries_rich_sections() {
    let client = MockClient::new()
        .respond(
            "validate_architecture",
            json!({
                "findings": [{
                    "priority": "Medium",
                    "component": "Module Organization",
                    "issues": "Some modules expose too much internal structure",
                    "recommendations": "Implement proper facade pattern"
                }],
                "patterns": {
                    "compliant": ["Basic ADK component structure"],
                    "non_compliant": ["Dependency injection pattern"]
                },
                "dependencies": {
                    "compliant": ["ADK core dependencies properly configured"],
                    "recommendations": ["Group related optional dependencies using Cargo features"]
                },
                "shared_context": "validated lib.rs module layout"
            }),
        )
        .respond(
            "get_best_practices",
            json!({
                "pattern_compliance": {
                    "followed": ["Proper async/await usage"],
                    "violated": ["Dependency injection"],
                    "recommendations": ["ADK Dependency Injection: Use ADK's DI container"]
                },
                "references": ["ADK Dependency Injection Patterns"]
            }),
        )
        .respond(
            "adk_query",
            json!({
                "recommended_patterns": ["Component Lifecycle pattern"],
                "references": ["ADK Component Lifecycle Guide"]
            }),
        );

    let subject = Subject::new("src/lib.rs", "pub mod user_service;", json!({}));
    let report = ArchitectureAgent::new(&client).validate(&subject).await;

    // Normalizer mapped the architecture agent's key spellings
    assert_eq!(report.findings[0].title, "Module Organization");
    assert_eq!(
        report.findings[0].recommendation,
        "Implement proper facade pattern"
    );

    // Baseline references come first
    assert_eq!(report.references[0], "ADK Architecture Guide");
    assert!(report
        .references
        .contains(&"ADK Component Lifecycle Guide".to_string()));

    let patterns = report.pattern_compliance.as_ref().unwrap();
    assert!(patterns
        .compliant
        .contains(&"Proper async/await usage".to_string()));
    assert!(patterns
        .missing
        .contains(&"Component Lifecycle pattern".to_string()));

    let deps = report.dependency_analysis.as_ref().unwrap();
    assert_eq!(deps.compliant.len(), 1);

    assert!(report
        .coordination_notes
        .iter()
        .any(|n| n.contains("Validation scope:")));
    assert!(report
        .coordination_notes
        .iter()
        .any(|n| n.contains("Shared context: validated lib.rs module layout")));
}

#[tokio::test]
async fn architecture_runs_dependency_pass_for_manifest() {
    let client = MockClient::new();
    let subject = Subject::new("Cargo.toml", "[dependencies]\nadk-core = \"0.1\"", json!({}));

    ArchitectureAgent::new(&client).validate(&subject).await;

    // validate_architecture runs twice: primary scope plus dependency focus
    let arch_calls = client
        .calls()
        .iter()
        .filter(|c| *c == "validate_architecture")
        .count();
    assert_eq!(arch_calls, 2);
}

#[tokio::test]
async fn assistant_routes_sources_by_type() {
    let client = MockClient::new();
    ProjectAssistantAgent::new(&client)
        .assist("my build is not working", json!({}))
        .await;
    assert!(client.calls().contains(&"review_rust_file".to_string()));
    assert!(!client.calls().contains(&"validate_architecture".to_string()));

    let client = MockClient::new();
    ProjectAssistantAgent::new(&client)
        .assist("set up a new ADK project", json!({}))
        .await;
    assert!(client.calls().contains(&"validate_architecture".to_string()));
    assert!(!client.calls().contains(&"review_rust_file".to_string()));
}

#[tokio::test]
async fn assistant_explicit_type_overrides_classification() {
    let client = MockClient::new();
    let report = ProjectAssistantAgent::new(&client)
        .assist_as("anything", json!({}), AssistanceType::ArchitectureGuidance)
        .await;
    assert!(report.title.contains("Architecture Guidance"));
    assert!(client.calls().contains(&"validate_architecture".to_string()));
}

#[tokio::test]
async fn docs_agent_formats_and_falls_back() {
    let client = MockClient::new().respond(
        "adk_query",
        json!({
            "content": {
                "answer": "Use the Component trait.",
                "references": ["https://developers.google.com/adk"]
            }
        }),
    );
    let markdown = DocsAgent::new(&client)
        .answer("how do components work", &DocsContext::default())
        .await;
    assert!(markdown.contains("Use the Component trait."));
    assert!(markdown.contains("**Query**: how do components work"));

    let failing = MockClient::failing("dns failure");
    let fallback = DocsAgent::new(&failing)
        .answer("how do components work", &DocsContext::default())
        .await;
    assert!(fallback.contains("Fallback Mode"));
    assert!(fallback.contains("dns failure"));
}

#[tokio::test]
async fn rendered_report_follows_section_rules() {
    let client = MockClient::new().respond(
        "review_rust_file",
        json!({
            "findings": [{"priority": "High", "title": "Check this"}],
            "references": ["https://developers.google.com/adk", "ADK Error Handling Best Practices"]
        }),
    );
    let report = CodeReviewAgent::new(&client).review_file(&rust_subject()).await;
    let markdown = render_report(&report);

    assert!(markdown.contains("# ADK Code Review Results"));
    assert!(markdown.contains("**[High] Check this**"));
    assert!(markdown.contains("1. **High Priority**: Check this"));
    assert!(markdown
        .contains("- [https://developers.google.com/adk](https://developers.google.com/adk)"));
    assert!(markdown.contains("- ADK Error Handling Best Practices"));

    // Empty collections omit their sections entirely
    let clean = MockClient::new();
    let clean_report = CodeReviewAgent::new(&clean).review_file(&rust_subject()).await;
    let clean_markdown = render_report(&clean_report);
    assert!(!clean_markdown.contains("## Action Items"));
    assert!(!clean_markdown.contains("## Detailed Findings"));
}
