//! Project assistant agent
//!
//! Classifies a free-form request into an assistance type, then gathers
//! documentation, best practices and (when relevant) architectural or code
//! insights through the shared compiler.

use super::sources::{
    AdkQuerySource, AnalysisSource, ArchitectureSource, BestPracticesSource, ReviewFileSource,
};
use super::Subject;
use crate::mcp::ToolClient;
use crate::models::AggregateReport;
use crate::report::{compile, AgentProfile};
use serde_json::{json, Value};

/// Kind of help the user is asking for.
///
/// Classification checks the keyword groups in declaration order; the first
/// group with a hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistanceType {
    ProjectSetup,
    TaskBreakdown,
    CodeExamples,
    Troubleshooting,
    ArchitectureGuidance,
    GeneralGuidance,
}

impl AssistanceType {
    /// Classify a request from its keywords
    pub fn from_request(request: &str) -> Self {
        let lower = request.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if matches(&[
            "setup", "set up", "create", "initialize", "start", "new project", "scaffold",
        ]) {
            AssistanceType::ProjectSetup
        } else if matches(&["break down", "steps", "plan", "roadmap", "guide", "process"]) {
            AssistanceType::TaskBreakdown
        } else if matches(&["example", "code", "implement", "how to", "show me", "sample"]) {
            AssistanceType::CodeExamples
        } else if matches(&[
            "error", "issue", "problem", "fix", "debug", "not working", "help",
        ]) {
            AssistanceType::Troubleshooting
        } else if matches(&[
            "architecture", "design", "structure", "organize", "pattern", "component",
        ]) {
            AssistanceType::ArchitectureGuidance
        } else {
            AssistanceType::GeneralGuidance
        }
    }

    /// Terms appended to the documentation query
    fn query_focus(&self) -> &'static str {
        match self {
            AssistanceType::ProjectSetup => {
                "project setup, initialization, configuration, dependencies"
            }
            AssistanceType::ArchitectureGuidance => {
                "architecture, design patterns, component organization, best practices"
            }
            AssistanceType::CodeExamples => {
                "code examples, implementation patterns, sample code, tutorials"
            }
            AssistanceType::Troubleshooting => {
                "troubleshooting, error resolution, debugging, common issues"
            }
            AssistanceType::TaskBreakdown => {
                "step-by-step guide, implementation plan, task breakdown, roadmap"
            }
            AssistanceType::GeneralGuidance => "general guidance, best practices, recommendations",
        }
    }

    /// Best practices scenario for this assistance type
    fn scenario(&self) -> &'static str {
        match self {
            AssistanceType::ProjectSetup => "project_initialization",
            AssistanceType::ArchitectureGuidance => "architectural_design",
            AssistanceType::CodeExamples => "implementation_patterns",
            AssistanceType::Troubleshooting => "error_handling",
            AssistanceType::TaskBreakdown => "development_process",
            AssistanceType::GeneralGuidance => "general_development",
        }
    }

    /// Human label for summaries
    pub fn label(&self) -> &'static str {
        match self {
            AssistanceType::ProjectSetup => "Project Setup",
            AssistanceType::TaskBreakdown => "Task Breakdown",
            AssistanceType::CodeExamples => "Code Examples",
            AssistanceType::Troubleshooting => "Troubleshooting",
            AssistanceType::ArchitectureGuidance => "Architecture Guidance",
            AssistanceType::GeneralGuidance => "General Guidance",
        }
    }
}

pub struct ProjectAssistantAgent<'a> {
    client: &'a dyn ToolClient,
}

impl<'a> ProjectAssistantAgent<'a> {
    pub fn new(client: &'a dyn ToolClient) -> Self {
        Self { client }
    }

    /// Provide assistance for a free-form request.
    pub async fn assist(&self, request: &str, project_context: Value) -> AggregateReport {
        let assistance_type = AssistanceType::from_request(request);
        self.assist_as(request, project_context, assistance_type)
            .await
    }

    /// Provide assistance with an explicitly chosen type
    pub async fn assist_as(
        &self,
        request: &str,
        project_context: Value,
        assistance_type: AssistanceType,
    ) -> AggregateReport {
        // The subject for an assistance request is the request text itself
        let subject = Subject::new(request, request, project_context);

        let profile = AgentProfile::new(
            format!("ADK Project Assistance - {}", assistance_type.label()),
            "Assisted with",
        )
        .with_baseline_references(vec![
            "Google ADK Official Documentation".to_string(),
            "ADK Rust API Reference".to_string(),
            "ADK Architecture Guide".to_string(),
        ]);

        let mut sources: Vec<Box<dyn AnalysisSource>> = vec![
            Box::new(AdkQuerySource {
                query: format!("{} - Focus on: {}", request, assistance_type.query_focus()),
                context: json!({
                    "assistance_type": assistance_type.scenario(),
                    "comprehensive_guidance": true,
                }),
            }),
            Box::new(BestPracticesSource {
                scenario: assistance_type.scenario().to_string(),
                context: json!({
                    "assistance_type": assistance_type.scenario(),
                    "comprehensive_guidance": true,
                }),
            }),
        ];

        match assistance_type {
            AssistanceType::ArchitectureGuidance | AssistanceType::ProjectSetup => {
                sources.push(Box::new(ArchitectureSource {
                    validation_focus: vec![
                        "project_organization".into(),
                        "component_design".into(),
                        "dependency_management".into(),
                        "adk_patterns".into(),
                    ],
                    priority_areas: vec![],
                    check_patterns: vec![
                        "component_organization",
                        "dependency_management",
                        "adk_patterns",
                    ],
                    required_markers: None,
                }));
            }
            AssistanceType::CodeExamples | AssistanceType::Troubleshooting => {
                sources.push(Box::new(ReviewFileSource {
                    focus_areas: vec![
                        "adk_patterns",
                        "best_practices",
                        "code_examples",
                        "implementation_guidance",
                    ],
                }));
            }
            _ => {}
        }

        compile(&profile, &subject, &sources, self.client).await
    }
}
