//! Architecture validation agent
//!
//! Validates architectural patterns and component organization. The
//! validation scope follows the file kind, and the report carries the richer
//! dependency-analysis and pattern-compliance sections.

use super::sources::{
    AdkQuerySource, AnalysisSource, ArchitectureSource, BestPracticesSource,
    DependencyAnalysisSource,
};
use super::Subject;
use crate::mcp::ToolClient;
use crate::models::AggregateReport;
use crate::report::{compile, AgentProfile};
use serde_json::json;

pub struct ArchitectureAgent<'a> {
    client: &'a dyn ToolClient,
}

/// What to validate for a given file kind
#[derive(Debug, Clone)]
struct ValidationScope {
    file_type: &'static str,
    validation_areas: Vec<&'static str>,
    priority_focus: Vec<&'static str>,
}

impl<'a> ArchitectureAgent<'a> {
    pub fn new(client: &'a dyn ToolClient) -> Self {
        Self { client }
    }

    /// Validate a file's architecture and compile the aggregate result.
    pub async fn validate(&self, subject: &Subject) -> AggregateReport {
        let scope = determine_scope(&subject.path);
        let areas = scope.validation_areas.join(", ");

        let profile = AgentProfile::new("ADK Architecture Validation Results", "Validated")
            .with_baseline_references(vec![
                "ADK Architecture Guide".to_string(),
                "ADK Component Design Patterns".to_string(),
                "ADK Dependency Management Best Practices".to_string(),
            ])
            .with_coordination_seed(vec![
                "Architectural validation focused on structural and organizational concerns"
                    .to_string(),
                format!("Validation scope: {}", areas),
                "Recommendations should be consistent with previous architectural decisions"
                    .to_string(),
            ]);

        let sources: Vec<Box<dyn AnalysisSource>> = vec![
            Box::new(ArchitectureSource {
                validation_focus: scope
                    .validation_areas
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                priority_areas: scope.priority_focus.iter().map(|s| s.to_string()).collect(),
                check_patterns: vec![
                    "component_organization",
                    "dependency_management",
                    "separation_of_concerns",
                    "adk_patterns",
                    "interface_design",
                ],
                required_markers: None,
            }),
            Box::new(BestPracticesSource {
                scenario: architectural_scenario(&scope).to_string(),
                context: json!({
                    "architectural_focus": true,
                    "file_type": scope.file_type,
                    "validation_areas": scope.validation_areas,
                }),
            }),
            Box::new(DependencyAnalysisSource),
            Box::new(AdkQuerySource {
                query: guidance_query(&scope),
                context: json!({
                    "architectural_focus": true,
                    "validation_areas": scope.validation_areas,
                }),
            }),
        ];

        compile(&profile, subject, &sources, self.client).await
    }
}

fn determine_scope(path: &str) -> ValidationScope {
    if path.ends_with("lib.rs") {
        ValidationScope {
            file_type: "library_root",
            validation_areas: vec![
                "public_api_design",
                "module_organization",
                "component_interfaces",
            ],
            priority_focus: vec!["api_design", "encapsulation"],
        }
    } else if path.ends_with("main.rs") {
        ValidationScope {
            file_type: "application_root",
            validation_areas: vec![
                "application_structure",
                "initialization_patterns",
                "dependency_injection",
            ],
            priority_focus: vec!["startup_sequence", "configuration"],
        }
    } else if path.ends_with("mod.rs") {
        ValidationScope {
            file_type: "module_interface",
            validation_areas: vec![
                "module_interfaces",
                "component_boundaries",
                "encapsulation",
            ],
            priority_focus: vec!["interface_design", "abstraction"],
        }
    } else if path.ends_with("Cargo.toml") {
        ValidationScope {
            file_type: "project_configuration",
            validation_areas: vec![
                "dependency_management",
                "feature_organization",
                "version_compatibility",
            ],
            priority_focus: vec!["dependencies", "features"],
        }
    } else if path.contains("adk.toml") || path.contains("adk-config.json") {
        ValidationScope {
            file_type: "adk_configuration",
            validation_areas: vec![
                "configuration_management",
                "adk_compliance",
                "environment_handling",
            ],
            priority_focus: vec!["configuration", "compliance"],
        }
    } else {
        ValidationScope {
            file_type: "component_file",
            validation_areas: vec!["component_design", "architectural_patterns"],
            priority_focus: vec!["patterns", "organization"],
        }
    }
}

fn architectural_scenario(scope: &ValidationScope) -> &'static str {
    if scope.validation_areas.contains(&"dependency_management") {
        "dependency_architecture"
    } else if scope.validation_areas.contains(&"component_interfaces") {
        "component_design"
    } else if scope.validation_areas.contains(&"application_structure") {
        "application_architecture"
    } else if scope.validation_areas.contains(&"configuration_management") {
        "configuration_architecture"
    } else {
        "general_architecture"
    }
}

/// ADK guidance topics derived from the validation scope
fn guidance_query(scope: &ValidationScope) -> String {
    let mut topics = Vec::new();
    if scope.validation_areas.contains(&"component_interfaces")
        || scope.validation_areas.contains(&"component_design")
    {
        topics.push("component architecture patterns");
    }
    if scope.validation_areas.contains(&"dependency_management") {
        topics.push("dependency injection best practices");
    }
    if scope.validation_areas.contains(&"configuration_management") {
        topics.push("configuration management patterns");
    }
    if topics.is_empty() {
        topics.push("general architecture best practices");
    }
    format!("ADK architectural guidance for: {}", topics.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_for_lib_rs() {
        let scope = determine_scope("src/lib.rs");
        assert_eq!(scope.file_type, "library_root");
        assert!(scope.validation_areas.contains(&"public_api_design"));
        assert_eq!(architectural_scenario(&scope), "component_design");
    }

    #[test]
    fn test_scope_for_manifest() {
        let scope = determine_scope("Cargo.toml");
        assert_eq!(scope.file_type, "project_configuration");
        assert_eq!(architectural_scenario(&scope), "dependency_architecture");
        assert!(guidance_query(&scope).contains("dependency injection"));
    }

    #[test]
    fn test_scope_for_adk_config() {
        let scope = determine_scope("config/adk.toml");
        assert_eq!(scope.file_type, "adk_configuration");
        assert_eq!(
            architectural_scenario(&scope),
            "configuration_architecture"
        );
    }

    #[test]
    fn test_scope_fallback_is_component_file() {
        let scope = determine_scope("src/billing.rs");
        assert_eq!(scope.file_type, "component_file");
        assert!(guidance_query(&scope).contains("general architecture"));
    }
}
