//! Blog configuration (blog.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "blog.yml";

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Directory
    pub posts_dir: String,
    pub output_dir: String,
    pub index_file: String,

    /// Extension of source posts, without the dot
    pub source_ext: String,

    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            output_dir: "posts-json".to_string(),
            index_file: "posts-list.json".to_string(),
            source_ext: "md".to_string(),
            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {:?}", path))?;
        let config: BlogConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config {:?}", path))?;

        let unknown = config.unknown_keys();
        if !unknown.is_empty() {
            tracing::debug!("Ignoring unknown keys in {:?}: {}", path, unknown.join(", "));
        }

        Ok(config)
    }

    /// Keys present in the file that this tool does not use, sorted
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.extra.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Preview server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    /// Directory served, relative to the base directory
    pub root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 8000,
            root: ".".to_string(),
        }
    }
}
