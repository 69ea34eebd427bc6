//! Markdown rendering of aggregate reports
//!
//! Pure function of the report data model: deterministic, never fails, no
//! side effects. Sections backed by empty collections are omitted entirely.

use crate::models::AggregateReport;

/// Render a report as a markdown document.
///
/// Section order is fixed: summary, detailed findings, best practices,
/// dependency validation, pattern compliance, coordination notes, action
/// items, references.
pub fn render_report(report: &AggregateReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", report.title));

    out.push_str("## Summary\n");
    out.push_str(&report.summary);
    out.push('\n');
    if report.degraded {
        out.push_str("\n> Degraded mode: results are based on local checks only.\n");
    }
    out.push_str(&format!("\n**Compliance Level**: {}\n", report.compliance));
    out.push_str(&format!("**Priority**: {}\n\n", report.overall_priority));

    if !report.findings.is_empty() {
        out.push_str("## Detailed Findings\n\n");
        for finding in &report.findings {
            out.push_str(&format!("**[{}] {}**\n", finding.priority, finding.title));
            out.push_str(&format!("- **Location**: {}\n", finding.location));
            out.push_str(&format!("- **Description**: {}\n", finding.description));
            out.push_str(&format!("- **ADK Impact**: {}\n", finding.impact));
            out.push_str(&format!(
                "- **Recommendation**: {}\n",
                finding.recommendation
            ));
            if let Some(example) = &finding.example {
                out.push_str(&format!("- **Example**:\n```rust\n{}\n```\n", example));
            }
            out.push('\n');
        }
    }

    if !report.best_practices_status.is_empty() {
        out.push_str("## Best Practices Validation\n");
        for (practice, passed) in &report.best_practices_status {
            let icon = if *passed { "✅" } else { "⚠️" };
            out.push_str(&format!("{} {}\n", icon, title_case(practice)));
        }
        out.push('\n');
    }

    if let Some(deps) = &report.dependency_analysis {
        out.push_str("## Dependency Validation\n");
        for dep in &deps.compliant {
            out.push_str(&format!("✅ {}\n", dep));
        }
        for issue in &deps.version_issues {
            out.push_str(&format!("⚠️ {}\n", issue));
        }
        for missing in &deps.missing {
            out.push_str(&format!("❌ Missing: {}\n", missing));
        }
        if !deps.recommendations.is_empty() {
            out.push_str("\n**Recommendations**:\n");
            for (i, rec) in deps.recommendations.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }
        out.push('\n');
    }

    if let Some(patterns) = &report.pattern_compliance {
        out.push_str("## Pattern Compliance\n");
        for pattern in &patterns.compliant {
            out.push_str(&format!("✅ {}\n", pattern));
        }
        for pattern in &patterns.non_compliant {
            out.push_str(&format!("⚠️ {}\n", pattern));
        }
        for pattern in &patterns.missing {
            out.push_str(&format!("❌ Missing: {}\n", pattern));
        }
        if !patterns.recommendations.is_empty() {
            out.push_str("\n**Key Patterns to Implement**:\n");
            for (i, rec) in patterns.recommendations.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }
        out.push('\n');
    }

    if !report.coordination_notes.is_empty() {
        out.push_str("## Coordination Notes\n");
        for note in &report.coordination_notes {
            out.push_str(&format!("- {}\n", note));
        }
        out.push('\n');
    }

    if !report.action_items.is_empty() {
        out.push_str("## Action Items\n");
        for (i, item) in report.action_items.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, item));
        }
        out.push('\n');
    }

    if !report.references.is_empty() {
        out.push_str("## References\n");
        for reference in &report.references {
            if reference.starts_with("http") {
                out.push_str(&format!("- [{}]({})\n", reference, reference));
            } else {
                out.push_str(&format!("- {}\n", reference));
            }
        }
    }

    out.trim_end().to_string() + "\n"
}

/// "error_handling" -> "Error Handling"
fn title_case(practice: &str) -> String {
    practice
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplianceLevel, Finding, Priority};
    use std::collections::BTreeMap;

    fn empty_report() -> AggregateReport {
        AggregateReport {
            title: "ADK Code Review Results".to_string(),
            summary: "Reviewed `lib.rs` - No issues found. Code follows ADK best practices."
                .to_string(),
            overall_priority: Priority::Low,
            compliance: ComplianceLevel::Excellent,
            degraded: false,
            findings: Vec::new(),
            best_practices_status: BTreeMap::new(),
            dependency_analysis: None,
            pattern_compliance: None,
            coordination_notes: Vec::new(),
            action_items: Vec::new(),
            references: Vec::new(),
        }
    }

    #[test]
    fn test_empty_sections_omitted() {
        let markdown = render_report(&empty_report());
        assert!(markdown.contains("## Summary"));
        assert!(!markdown.contains("## Detailed Findings"));
        assert!(!markdown.contains("## Action Items"));
        assert!(!markdown.contains("## References"));
        assert!(!markdown.contains("## Coordination Notes"));
    }

    #[test]
    fn test_http_reference_rendered_as_link() {
        let mut report = empty_report();
        report.references = vec![
            "https://developers.google.com/adk".to_string(),
            "ADK Translation Guide".to_string(),
        ];
        let markdown = render_report(&report);
        assert!(markdown
            .contains("- [https://developers.google.com/adk](https://developers.google.com/adk)"));
        assert!(markdown.contains("- ADK Translation Guide"));
    }

    #[test]
    fn test_finding_block_with_example() {
        let mut report = empty_report();
        let mut finding = Finding::new(
            Priority::High,
            "Translation Support Missing",
            "Lines 45-52",
            "Hardcoded error messages",
            "Prevents internationalization",
            "Use ADK translation APIs",
        );
        finding.example = Some("translate!(\"errors.user_not_found\")".to_string());
        report.findings = vec![finding];

        let markdown = render_report(&report);
        assert!(markdown.contains("**[High] Translation Support Missing**"));
        assert!(markdown.contains("```rust\ntranslate!"));
    }

    #[test]
    fn test_best_practices_icons_and_names() {
        let mut report = empty_report();
        report
            .best_practices_status
            .insert("error_handling".to_string(), false);
        report
            .best_practices_status
            .insert("async_usage".to_string(), true);

        let markdown = render_report(&report);
        assert!(markdown.contains("✅ Async Usage"));
        assert!(markdown.contains("⚠️ Error Handling"));
    }

    #[test]
    fn test_action_items_numbered() {
        let mut report = empty_report();
        report.action_items = vec![
            "**High Priority**: fix this".to_string(),
            "**Low Priority**: then this".to_string(),
        ];
        let markdown = render_report(&report);
        assert!(markdown.contains("1. **High Priority**: fix this"));
        assert!(markdown.contains("2. **Low Priority**: then this"));
    }

    #[test]
    fn test_degraded_notice() {
        let mut report = empty_report();
        report.degraded = true;
        assert!(render_report(&report).contains("Degraded mode"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = empty_report();
        assert_eq!(render_report(&report), render_report(&report));
    }
}
