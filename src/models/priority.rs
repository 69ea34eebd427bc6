use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Priority of a single finding.
///
/// Variants are declared lowest-first so the derived `Ord` ranks
/// Critical > High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Display label, also the exact wire format the MCP server emits
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raised when a raw finding carries a priority label outside the four
/// recognized values. Matching is case-sensitive: "critical" is rejected.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid priority label: '{0}'")]
pub struct InvalidPriorityError(pub String);

impl FromStr for Priority {
    type Err = InvalidPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(Priority::Critical),
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(InvalidPriorityError(other.to_string())),
        }
    }
}

/// Overall compliance verdict derived from a finding sequence.
///
/// `Excellent` (no findings at all) and `GoodLowPriority` (findings exist but
/// all are Low) are deliberately distinct terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceLevel {
    /// At least one Critical finding
    NonCompliant,
    /// At least one High finding
    PartiallyCompliant,
    /// At least one Medium finding
    Good,
    /// Findings present, all Low
    GoodLowPriority,
    /// No findings
    Excellent,
    /// Degraded mode: no analysis source was available
    Unknown,
}

impl ComplianceLevel {
    /// Display label as the original agents reported it
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceLevel::NonCompliant => "Non-Compliant - Critical Issues",
            ComplianceLevel::PartiallyCompliant => "Partially Compliant - High Priority Issues",
            ComplianceLevel::Good => "Good - Minor Improvements Recommended",
            ComplianceLevel::GoodLowPriority => "Good - Low Priority Improvements Available",
            ComplianceLevel::Excellent => "Excellent - Fully Compliant",
            ComplianceLevel::Unknown => "Unknown - Limited Analysis",
        }
    }
}

impl std::fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_parse_exact_labels() {
        assert_eq!("Critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn test_priority_parse_rejects_unknown_label() {
        let err = "Urgent".parse::<Priority>().unwrap_err();
        assert!(err.to_string().contains("Urgent"));
    }

    #[test]
    fn test_priority_parse_is_case_sensitive() {
        assert!("critical".parse::<Priority>().is_err());
        assert!("HIGH".parse::<Priority>().is_err());
    }

    #[test]
    fn test_compliance_labels_distinct() {
        assert_ne!(
            ComplianceLevel::Excellent.label(),
            ComplianceLevel::GoodLowPriority.label()
        );
    }
}
