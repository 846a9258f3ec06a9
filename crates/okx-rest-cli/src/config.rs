/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Client configuration for the OKX adapter
[POS]:    Configuration layer - transport setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use anyhow::Context;
use okx_rest_adapter::ClientConfig;

/// Load client settings from a YAML file, or defaults when no file is given.
///
/// Missing keys fall back to the adapter defaults (production host, 5s).
pub fn load_client_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    let Some(path) = path else {
        return Ok(ClientConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_client_config(&content)
}

pub fn parse_client_config(content: &str) -> anyhow::Result<ClientConfig> {
    let config: ClientConfig = serde_yaml::from_str(content).context("parse client config")?;
    Ok(config)
}
