//! Agent configuration stored at ~/.adk-agents/config.toml

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration shared by all agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// MCP server name, used in error messages
    pub server_name: String,

    /// HTTP endpoint of the MCP server
    pub endpoint: String,

    /// Per-tool-call timeout in seconds
    pub request_timeout_secs: u64,

    /// Whether degraded local analysis is allowed when the server is down
    pub fallback_enabled: bool,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            server_name: "arkaft-google-adk".to_string(),
            endpoint: "http://127.0.0.1:3100/mcp".to_string(),
            request_timeout_secs: 30,
            fallback_enabled: true,
        }
    }
}

impl AgentsConfig {
    /// Config file path (~/.adk-agents/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        let config_dir = home.join(".adk-agents");
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: AgentsConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty TOML
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
