//! CLI commands
//!
//! Thin wrappers: read the subject, call an agent, print the rendered
//! markdown. The agents themselves never fail; degraded reports are flagged
//! with a warning line.

pub mod architecture;
pub mod assist;
pub mod docs;
pub mod review;

use crate::config::AgentsConfig;
use crate::mcp::HttpToolClient;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Resolve the effective configuration with CLI overrides applied
pub fn effective_config(endpoint: Option<String>, server: Option<String>) -> Result<AgentsConfig> {
    let mut config = AgentsConfig::load()?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(server) = server {
        config.server_name = server;
    }
    Ok(config)
}

/// Build the HTTP client for the configured server
pub fn build_client(config: &AgentsConfig) -> Result<HttpToolClient> {
    HttpToolClient::new(
        config.endpoint.clone(),
        config.server_name.clone(),
        config.request_timeout(),
    )
}

/// Spinner shown while a remote analysis is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
