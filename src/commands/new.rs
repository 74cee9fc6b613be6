//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::helpers;
use crate::Blog;

/// Create a new post with a front-matter scaffold
///
/// Without an explicit category one is picked from the tags. The excerpt is
/// taken from `body` when given. Returns the path of the created file.
pub fn create_post(
    blog: &Blog,
    title: &str,
    category: Option<&str>,
    tags: &[String],
    body: Option<&str>,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title: {:?}", title);
    }

    let category = category.unwrap_or_else(|| helpers::determine_category(tags));
    let content = scaffold(title, &helpers::today(), category, tags, body)?;

    fs::create_dir_all(&blog.posts_dir)?;

    let file_path = blog
        .posts_dir
        .join(format!("{}.{}", slug, blog.config.source_ext));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

fn scaffold(
    title: &str,
    date: &str,
    category: &str,
    tags: &[String],
    body: Option<&str>,
) -> Result<String> {
    let excerpt = body
        .map(|b| helpers::generate_excerpt(b, helpers::EXCERPT_LENGTH))
        .unwrap_or_default();

    let mut text = format!(
        "---\ntitle: {}\ndate: {}\ncategory: {}\nexcerpt: {}\ntags: {}\n---\n\n# {}\n",
        quoted("title", title)?,
        date,
        quoted("category", category)?,
        quoted("excerpt", &excerpt)?,
        serde_json::to_string(tags)?,
        title,
    );

    if let Some(body) = body {
        text.push('\n');
        text.push_str(body.trim());
        text.push('\n');
    }

    Ok(text)
}

/// Wrap a value in the one layer of quotes the extractor strips
fn quoted(key: &str, value: &str) -> Result<String> {
    if value.contains(['\n', '\r']) {
        anyhow::bail!("{} cannot span several lines: {:?}", key, value);
    }
    if value.starts_with('[') && value.ends_with(']') {
        anyhow::bail!("{} would be read back as a list: {:?}", key, value);
    }
    Ok(format!("\"{}\"", value))
}
