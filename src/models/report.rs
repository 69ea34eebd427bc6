use super::finding::Finding;
use super::priority::{ComplianceLevel, Priority};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Merged result of one agent run across all its analysis sources.
///
/// Built once by the report compiler (or the fallback synthesizer) and never
/// mutated afterwards; the renderer only reads it.
///
/// Invariants:
/// - `findings` preserves source-call order, then within-source order
/// - `overall_priority` is the highest rank present, Low when empty
/// - `references` contains no duplicates and preserves first-seen order,
///   with the agent's baseline references first
/// - `degraded` is true only for fallback-synthesized reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Report heading, e.g. "ADK Code Review Results"
    pub title: String,
    /// One-sentence result summary
    pub summary: String,
    /// Highest-rank priority among findings
    pub overall_priority: Priority,
    /// Compliance verdict derived from the same scan
    pub compliance: ComplianceLevel,
    /// True when no analysis source was available and only local
    /// heuristics ran
    pub degraded: bool,
    /// All findings in source-call order
    pub findings: Vec<Finding>,
    /// Practice name to pass/fail, overlaid across sources
    pub best_practices_status: BTreeMap<String, bool>,
    /// Dependency validation section (architecture analyses only)
    pub dependency_analysis: Option<DependencyAnalysis>,
    /// Pattern compliance section (architecture analyses only)
    pub pattern_compliance: Option<PatternCompliance>,
    /// Notes for coordinating with other agents
    pub coordination_notes: Vec<String>,
    /// One formatted line per finding, grouped by priority rank
    pub action_items: Vec<String>,
    /// Deduplicated documentation references
    pub references: Vec<String>,
}

/// Dependency validation extracted from architecture analyses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyAnalysis {
    pub compliant: Vec<String>,
    pub version_issues: Vec<String>,
    pub missing: Vec<String>,
    pub recommendations: Vec<String>,
}

impl DependencyAnalysis {
    pub fn is_empty(&self) -> bool {
        self.compliant.is_empty()
            && self.version_issues.is_empty()
            && self.missing.is_empty()
            && self.recommendations.is_empty()
    }
}

/// ADK pattern compliance extracted from architecture analyses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternCompliance {
    pub compliant: Vec<String>,
    pub non_compliant: Vec<String>,
    pub missing: Vec<String>,
    pub recommendations: Vec<String>,
}

impl PatternCompliance {
    pub fn is_empty(&self) -> bool {
        self.compliant.is_empty()
            && self.non_compliant.is_empty()
            && self.missing.is_empty()
            && self.recommendations.is_empty()
    }
}
