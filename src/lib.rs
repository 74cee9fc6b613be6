//! posts-json: markdown blog posts to JSON
//!
//! Converts a directory of markdown posts with front matter into one JSON
//! record per post plus a date-sorted index, and serves the result locally
//! with permissive CORS headers.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source posts directory
    pub posts_dir: PathBuf,
    /// Per-post JSON output directory
    pub output_dir: PathBuf,
    /// Aggregated index file
    pub index_path: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(config::CONFIG_FILE);

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::BlogConfig) -> Self {
        let posts_dir = base_dir.join(&config.posts_dir);
        let output_dir = base_dir.join(&config.output_dir);
        let index_path = base_dir.join(&config.index_file);

        Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
            index_path,
        }
    }

    /// Directory served by the preview server
    pub fn serve_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.server.root)
    }

    /// Convert all posts and rebuild the index
    pub fn convert(&self) -> Result<Vec<content::PostRecord>> {
        commands::convert::run(self)
    }

    /// Remove generated files
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(
        &self,
        title: &str,
        category: Option<&str>,
        tags: &[String],
        body: Option<&str>,
    ) -> Result<PathBuf> {
        commands::new::create_post(self, title, category, tags, body)
    }
}
