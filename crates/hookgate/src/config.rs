use anyhow::{Context, Result};
use hookgate_gateway::DEFAULT_MAX_BODY_BYTES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ServeArgs;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub hooks: HooksConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HooksConfig {
    #[serde(default = "default_enrich")]
    pub enrich: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_enrich() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            enrich: default_enrich(),
        }
    }
}

impl Config {
    /// Flags and environment variables win over the file
    pub fn apply_overrides(&mut self, args: &ServeArgs) {
        if let Some(host) = args.host() {
            self.server.host = host;
        }
        if let Some(port) = args.port() {
            self.server.port = port;
        }
        if let Some(max_body_bytes) = args.max_body_bytes() {
            self.server.max_body_bytes = max_body_bytes;
        }
        if let Some(enrich) = args.enrich() {
            self.hooks.enrich = enrich;
        }
    }
}

/// Load config from file or use defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let path = expand_path(path);
        let content =
            fs::read_to_string(&path).context(format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    } else {
        Ok(Config::default())
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}
