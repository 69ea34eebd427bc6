use super::priority::{InvalidPriorityError, Priority};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single analysis finding, normalized from one raw MCP record.
///
/// Immutable after normalization; owned by the aggregate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Severity of the finding
    pub priority: Priority,
    /// Short title or component name
    pub title: String,
    /// File location or "Component level"
    pub location: String,
    /// What was observed
    pub description: String,
    /// ADK compliance / impact note
    pub impact: String,
    /// How to address it
    pub recommendation: String,
    /// Optional code example
    pub example: Option<String>,
}

impl Finding {
    /// Normalize a raw MCP finding record.
    ///
    /// The server's agents are not consistent about key names, so alternate
    /// spellings are accepted: `component` for title, `issues` for
    /// description, `recommendations` for recommendation, `adk_compliance`
    /// or `adk_impact` for impact.
    ///
    /// Defaults: missing `priority` is Medium, missing string fields are
    /// empty, missing `example` is absent. An unrecognized priority label is
    /// an error; everything else is tolerated.
    pub fn from_raw(raw: &Value) -> Result<Self, InvalidPriorityError> {
        let priority = match raw.get("priority").and_then(|v| v.as_str()) {
            Some(label) => label.parse()?,
            None => Priority::Medium,
        };

        Ok(Self {
            priority,
            title: first_string(raw, &["title", "component"]),
            location: first_string(raw, &["location"]),
            description: first_string(raw, &["description", "issues"]),
            impact: first_string(raw, &["impact", "adk_impact", "adk_compliance"]),
            recommendation: first_string(raw, &["recommendation", "recommendations"]),
            example: raw
                .get("example")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        })
    }

    /// Construct a finding from known-good parts (used by the fallback
    /// synthesizer and tests)
    pub fn new(
        priority: Priority,
        title: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            title: title.into(),
            location: location.into(),
            description: description.into(),
            impact: impact.into(),
            recommendation: recommendation.into(),
            example: None,
        }
    }
}

/// First present string value among the given keys, or empty
fn first_string(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| raw.get(*k).and_then(|v| v.as_str()))
        .unwrap_or("")
        .to_string()
}
