use super::{build_client, effective_config, spinner};
use crate::agents::{CodeReviewAgent, Subject};
use crate::report::render_report;
use crate::Result;
use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Run a code review against the MCP server and print the markdown report
pub async fn run(file: &Path, endpoint: Option<String>, server: Option<String>) -> Result<()> {
    let config = effective_config(endpoint, server)?;
    let client = build_client(&config)?;

    let content = fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Cannot read '{}': {}", file.display(), e))?;
    let subject = Subject::new(file.display().to_string(), content, json!({}));

    let pb = spinner("Reviewing with arkaft-google-adk...");
    let agent = CodeReviewAgent::new(&client);
    let report = agent.review_file(&subject).await;
    pb.finish_and_clear();

    if report.degraded {
        if !config.fallback_enabled {
            anyhow::bail!(
                "MCP server '{}' unavailable and fallback analysis is disabled",
                config.server_name
            );
        }
        eprintln!(
            "{}",
            "⚠️  MCP server unavailable - showing degraded local analysis".yellow()
        );
    }

    println!("{}", render_report(&report));
    Ok(())
}
