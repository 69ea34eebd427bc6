use super::{build_client, effective_config, spinner};
use crate::agents::ProjectAssistantAgent;
use crate::report::render_report;
use crate::Result;
use colored::Colorize;
use serde_json::json;

/// Provide project assistance for a free-form request
pub async fn run(request: &str, endpoint: Option<String>, server: Option<String>) -> Result<()> {
    let config = effective_config(endpoint, server)?;
    let client = build_client(&config)?;

    let pb = spinner("Gathering ADK guidance...");
    let agent = ProjectAssistantAgent::new(&client);
    let report = agent.assist(request, json!({})).await;
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
            "⚠️  MCP server unavailable - showing degraded guidance".yellow()
        );
    }

    println!("{}", render_report(&report));
    Ok(())
}
