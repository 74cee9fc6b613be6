//! Convert posts to JSON

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::loader::PostLoader;
use crate::content::{PostIndex, PostRecord};
use crate::error::{self, ConvertError};
use crate::Blog;

/// Convert every post and rebuild the index
///
/// Stops at the first failing post. Records already written stay on disk and
/// the index is left untouched.
pub fn run(blog: &Blog) -> Result<Vec<PostRecord>> {
    let start = std::time::Instant::now();

    ensure_dir(&blog.output_dir)?;

    let loader = PostLoader::new(blog);
    let mut posts = Vec::new();

    for path in loader.source_files()? {
        let post = loader.load_post(&path)?;
        let output_path = blog.output_dir.join(post.output_filename());
        write_json(&output_path, &post)?;
        tracing::info!("Converted: {} -> {}", post.filename, post.output_filename());
        posts.push(post);
    }

    let index = build_index(&posts);
    write_json(&blog.index_path, &index)?;
    tracing::info!(
        "Updated {:?} with {} posts",
        blog.index_path,
        index.len()
    );

    let duration = start.elapsed();
    tracing::info!("Converted in {:.2}s", duration.as_secs_f64());

    Ok(posts)
}

/// Build the index, flagging dates that will not sort chronologically
pub fn build_index(posts: &[PostRecord]) -> PostIndex {
    let index = PostIndex::build(posts);

    for entry in index.entries().iter().filter(|e| !e.has_sortable_date()) {
        tracing::warn!(
            "{}: date {} is not YYYY-MM-DD; the index sorts dates as plain text",
            entry.filename,
            serde_json::to_string(&entry.date).unwrap_or_default()
        );
    }

    index
}

/// Create a directory if it does not exist yet
pub fn ensure_dir(dir: &Path) -> error::Result<()> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write a value as 2-space indented JSON, overwriting the file
fn write_json<T: Serialize>(path: &Path, value: &T) -> error::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| ConvertError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
