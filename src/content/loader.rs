//! Content loader - loads posts from the posts directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, PostRecord};
use crate::error::{ConvertError, Result};
use crate::Blog;

/// Loads posts from the configured posts directory
pub struct PostLoader<'a> {
    blog: &'a Blog,
}

impl<'a> PostLoader<'a> {
    /// Create a new post loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Source files directly inside the posts directory, sorted by file name
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.is_dir() {
            tracing::warn!("Posts directory {:?} does not exist", posts_dir);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| ConvertError::List {
                path: posts_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && has_extension(path, &self.blog.config.source_ext) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Load all posts, in file name order
    pub fn load_posts(&self) -> Result<Vec<PostRecord>> {
        self.source_files()?
            .iter()
            .map(|path| self.load_post(path))
            .collect()
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<PostRecord> {
        let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&text);

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        tracing::debug!("Loaded {} ({} front-matter fields)", filename, fm.len());

        Ok(PostRecord::new(filename, fm, body))
    }
}

/// Check if a file has the given extension
fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == ext)
        .unwrap_or(false)
}
