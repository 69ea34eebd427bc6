//! Result compiler: merges N analysis sources into one aggregate report
//!
//! Sources are awaited one at a time, in the order the agent configured
//! them; the findings and reference ordering invariants fall directly out of
//! that. A failing source is caught and contributes nothing. Only when every
//! applicable source has failed does compilation hand over to the fallback
//! synthesizer.

use super::dedup::dedup_references;
use super::fallback::synthesize_fallback;
use super::resolve::{resolve_compliance, resolve_priority};
use crate::agents::sources::AnalysisSource;
use crate::agents::Subject;
use crate::mcp::{get_nested_string_array, get_string_array, SourceUnavailableError, ToolClient};
use crate::models::{AggregateReport, DependencyAnalysis, Finding, PatternCompliance, Priority};
use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Fixed per-agent report parameters
#[derive(Debug, Clone)]
pub struct AgentProfile {
    /// Rendered report heading
    pub title: String,
    /// Verb phrase for the summary line, e.g. "Reviewed"
    pub activity: String,
    /// References every report of this agent starts with
    pub baseline_references: Vec<String>,
    /// Seed coordination notes; when empty, no coordination section is
    /// produced
    pub coordination_seed: Vec<String>,
}

impl AgentProfile {
    pub fn new(title: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            activity: activity.into(),
            baseline_references: Vec::new(),
            coordination_seed: Vec::new(),
        }
    }

    pub fn with_baseline_references(mut self, references: Vec<String>) -> Self {
        self.baseline_references = references;
        self
    }

    pub fn with_coordination_seed(mut self, notes: Vec<String>) -> Self {
        self.coordination_seed = notes;
        self
    }
}

/// Compile an aggregate report from the given sources.
///
/// Never fails: single-source errors are swallowed, and total source failure
/// produces a degraded fallback report instead of an error.
pub async fn compile(
    profile: &AgentProfile,
    subject: &Subject,
    sources: &[Box<dyn AnalysisSource>],
    client: &dyn ToolClient,
) -> AggregateReport {
    let mut payloads: Vec<Value> = Vec::new();
    let mut failures: Vec<SourceUnavailableError> = Vec::new();
    let mut attempted = 0usize;

    for source in sources {
        if !source.applies(subject) {
            continue;
        }
        attempted += 1;
        match source.analyze(subject, client).await {
            Ok(payload) => payloads.push(payload),
            Err(e) => {
                let wrapped = SourceUnavailableError::new(source.name(), e.to_string());
                eprintln!("{} {}", "Warning:".yellow(), wrapped);
                failures.push(wrapped);
            }
        }
    }

    // Total source failure is observably different from zero findings with
    // full participation
    if attempted > 0 && payloads.is_empty() {
        let reasons: Vec<String> = failures.iter().map(|f| f.reason.clone()).collect();
        return synthesize_fallback(profile, subject, &reasons.join("; "));
    }

    let findings = collect_findings(&payloads);
    let overall_priority = resolve_priority(&findings);
    let compliance = resolve_compliance(&findings);

    AggregateReport {
        title: profile.title.clone(),
        summary: build_summary(profile, subject, &findings, compliance.label()),
        overall_priority,
        compliance,
        degraded: false,
        best_practices_status: collect_best_practices(&payloads),
        dependency_analysis: collect_dependency_analysis(&payloads),
        pattern_compliance: collect_pattern_compliance(&payloads),
        coordination_notes: collect_coordination_notes(profile, &findings, &payloads),
        action_items: build_action_items(&findings),
        references: collect_references(profile, &payloads),
        findings,
    }
}

/// Normalize every raw finding record from every payload, in source order.
///
/// A record with an unrecognized priority label is skipped with a warning;
/// it never aborts compilation.
fn collect_findings(payloads: &[Value]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for payload in payloads {
        let Some(records) = payload.get("findings").and_then(|v| v.as_array()) else {
            continue;
        };
        for record in records {
            match Finding::from_raw(record) {
                Ok(finding) => findings.push(finding),
                Err(e) => {
                    eprintln!("{} skipping finding: {}", "Warning:".yellow(), e);
                }
            }
        }
    }
    findings
}

/// Overlay `best_practices` then `compliance` maps across payloads,
/// last-write-wins per key
fn collect_best_practices(payloads: &[Value]) -> BTreeMap<String, bool> {
    let mut status = BTreeMap::new();
    for payload in payloads {
        for key in ["best_practices", "compliance"] {
            if let Some(map) = payload.get(key).and_then(|v| v.as_object()) {
                for (practice, value) in map {
                    if let Some(passed) = value.as_bool() {
                        status.insert(practice.clone(), passed);
                    }
                }
            }
        }
    }
    status
}

fn collect_dependency_analysis(payloads: &[Value]) -> Option<DependencyAnalysis> {
    let mut analysis = DependencyAnalysis::default();
    for payload in payloads {
        // Nested form under a `dependencies` object
        analysis
            .compliant
            .extend(get_nested_string_array(payload, "dependencies", "compliant"));
        analysis
            .version_issues
            .extend(get_nested_string_array(payload, "dependencies", "issues"));
        analysis
            .missing
            .extend(get_nested_string_array(payload, "dependencies", "missing"));
        analysis.recommendations.extend(get_nested_string_array(
            payload,
            "dependencies",
            "recommendations",
        ));

        // Flat form from a dedicated dependency analysis pass
        analysis
            .compliant
            .extend(get_string_array(payload, "compliant_dependencies"));
        analysis
            .version_issues
            .extend(get_string_array(payload, "version_issues"));
        analysis
            .missing
            .extend(get_string_array(payload, "missing_dependencies"));
    }
    (!analysis.is_empty()).then_some(analysis)
}

fn collect_pattern_compliance(payloads: &[Value]) -> Option<PatternCompliance> {
    let mut patterns = PatternCompliance::default();
    for payload in payloads {
        patterns
            .compliant
            .extend(get_nested_string_array(payload, "patterns", "compliant"));
        patterns
            .non_compliant
            .extend(get_nested_string_array(payload, "patterns", "non_compliant"));
        patterns
            .missing
            .extend(get_nested_string_array(payload, "patterns", "missing"));

        // Best-practices payloads use followed/violated vocabulary
        patterns.compliant.extend(get_nested_string_array(
            payload,
            "pattern_compliance",
            "followed",
        ));
        patterns.non_compliant.extend(get_nested_string_array(
            payload,
            "pattern_compliance",
            "violated",
        ));
        patterns.recommendations.extend(get_nested_string_array(
            payload,
            "pattern_compliance",
            "recommendations",
        ));

        // adk_query guidance suggests patterns the project lacks
        patterns
            .missing
            .extend(get_string_array(payload, "recommended_patterns"));
    }
    (!patterns.is_empty()).then_some(patterns)
}

fn collect_coordination_notes(
    profile: &AgentProfile,
    findings: &[Finding],
    payloads: &[Value],
) -> Vec<String> {
    if profile.coordination_seed.is_empty() {
        return Vec::new();
    }

    let mut notes = profile.coordination_seed.clone();
    if findings.iter().any(|f| f.priority >= Priority::High) {
        notes.push(
            "High priority issues identified - coordinate with code review for implementation details"
                .to_string(),
        );
    }
    for payload in payloads {
        if let Some(shared) = payload.get("shared_context").and_then(|v| v.as_str()) {
            notes.push(format!("Shared context: {}", shared));
        }
    }
    notes
}

/// Group findings by priority rank, highest first, preserving within-group
/// source order
fn build_action_items(findings: &[Finding]) -> Vec<String> {
    let mut items = Vec::new();
    for rank in [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ] {
        for finding in findings.iter().filter(|f| f.priority == rank) {
            items.push(format!("**{} Priority**: {}", rank, finding.title));
        }
    }
    items
}

/// Baseline references first, then each payload's list, deduplicated on
/// first occurrence
fn collect_references(profile: &AgentProfile, payloads: &[Value]) -> Vec<String> {
    let mut lists = vec![profile.baseline_references.clone()];
    for payload in payloads {
        lists.push(get_string_array(payload, "references"));
    }
    dedup_references(&lists)
}

fn build_summary(
    profile: &AgentProfile,
    subject: &Subject,
    findings: &[Finding],
    compliance_label: &str,
) -> String {
    let name = subject.file_name();
    if findings.is_empty() {
        format!(
            "{} `{}` - No issues found. Code follows ADK best practices.",
            profile.activity, name
        )
    } else {
        format!(
            "{} `{}` - {} finding(s) identified. {}.",
            profile.activity,
            name,
            findings.len(),
            compliance_label
        )
    }
}
