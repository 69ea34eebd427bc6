//! Documentation agent
//!
//! Answers ADK documentation queries via `adk_query`. Unlike the report
//! agents this one produces a free-form markdown document, since the server
//! returns prose sections rather than findings.

use crate::mcp::{get_string_array, ToolClient};
use serde_json::{json, Value};

pub struct DocsAgent<'a> {
    client: &'a dyn ToolClient,
}

/// Development context used to sharpen the documentation query
#[derive(Debug, Clone, Default)]
pub struct DocsContext {
    /// File the user is currently working in, if any
    pub current_file: Option<String>,
}

impl<'a> DocsAgent<'a> {
    pub fn new(client: &'a dyn ToolClient) -> Self {
        Self { client }
    }

    /// Answer a documentation query as markdown.
    ///
    /// Never fails; a fixed fallback document is returned when the server is
    /// unavailable.
    pub async fn answer(&self, query: &str, context: &DocsContext) -> String {
        let enhanced = enhance_query(query, context);
        let arguments = json!({
            "query": enhanced,
            "include_examples": true,
            "version": "latest",
        });

        match self.client.call_tool("adk_query", arguments).await {
            Ok(payload) => format_response(&payload, query),
            Err(e) => fallback_response(query, &e.to_string()),
        }
    }
}

/// Append search terms derived from the current file kind
fn enhance_query(query: &str, context: &DocsContext) -> String {
    let mut terms: Vec<&str> = Vec::new();
    if let Some(file) = &context.current_file {
        if file.to_lowercase().ends_with("cargo.toml") {
            terms.extend(["dependencies", "configuration", "build"]);
        } else if file.ends_with(".rs") {
            terms.extend(["rust", "implementation", "api"]);
        }
    }
    if terms.is_empty() {
        query.to_string()
    } else {
        format!("{} {}", query, terms.join(" "))
    }
}

/// Map the documentation payload to a markdown response
fn format_response(payload: &Value, query: &str) -> String {
    let Some(content) = payload.get("content") else {
        return fallback_response(query, "empty response");
    };

    let mut out = String::new();
    out.push_str("# ADK Documentation Response\n\n");
    out.push_str(&format!("**Query**: {}\n\n", query));
    out.push_str("## Answer\n");
    out.push_str(
        content
            .get("answer")
            .and_then(|v| v.as_str())
            .unwrap_or("No specific answer available"),
    );
    out.push('\n');

    let examples = get_string_array(content, "examples");
    if !examples.is_empty() {
        out.push_str("\n## Code Examples\n```rust\n");
        for example in &examples {
            out.push_str(example);
            out.push('\n');
        }
        out.push_str("```\n");
    }

    let practices = get_string_array(content, "best_practices");
    if !practices.is_empty() {
        out.push_str("\n## Best Practices\n");
        for practice in &practices {
            out.push_str(&format!("- {}\n", practice));
        }
    }

    let references = get_string_array(content, "references");
    if !references.is_empty() {
        out.push_str("\n## Official References\n");
        for reference in &references {
            out.push_str(&format!("- {}\n", reference));
        }
    }

    let related = get_string_array(content, "related_topics");
    if !related.is_empty() {
        out.push_str("\n## Related Topics\n");
        for topic in &related {
            out.push_str(&format!("- {}\n", topic));
        }
    }

    out
}

/// Fixed document for degraded mode
fn fallback_response(query: &str, error: &str) -> String {
    format!(
        "# ADK Documentation Response (Fallback Mode)\n\n\
         **Query**: {}\n\n\
         ## Notice\n\
         The ADK documentation MCP server is currently unavailable ({}). Here's general guidance:\n\n\
         ## General ADK Resources\n\
         - **Official Documentation**: https://developers.google.com/adk\n\
         - **GitHub Repository**: https://github.com/google/adk\n\
         - **Community Forums**: Google ADK Developer Community\n\n\
         ## Next Steps\n\
         - Check the official Google ADK documentation for your specific question\n\
         - Try your query again when the MCP server is available\n",
        query, error
    )
}
