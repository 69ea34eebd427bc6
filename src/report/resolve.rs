//! Priority and compliance resolution
//!
//! A precedence reduction, not a vote: the highest rank present wins
//! regardless of how many findings carry it.

use crate::models::{ComplianceLevel, Finding, Priority};

/// Resolve the overall priority of a finding sequence.
///
/// Empty input resolves to Low; that is the documented default, not an
/// error.
pub fn resolve_priority(findings: &[Finding]) -> Priority {
    findings
        .iter()
        .map(|f| f.priority)
        .max()
        .unwrap_or(Priority::Low)
}

/// Resolve the compliance verdict for a finding sequence.
///
/// Maps the same precedence scan to the richer label set. An all-Low
/// non-empty sequence is a distinct state from an empty one.
pub fn resolve_compliance(findings: &[Finding]) -> ComplianceLevel {
    if findings.is_empty() {
        return ComplianceLevel::Excellent;
    }
    match resolve_priority(findings) {
        Priority::Critical => ComplianceLevel::NonCompliant,
        Priority::High => ComplianceLevel::PartiallyCompliant,
        Priority::Medium => ComplianceLevel::Good,
        Priority::Low => ComplianceLevel::GoodLowPriority,
    }
}
