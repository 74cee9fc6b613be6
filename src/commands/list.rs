//! List blog content

use anyhow::Result;
use std::collections::BTreeMap;

use crate::content::loader::PostLoader;
use crate::content::{FieldValue, IndexEntry, PostIndex};
use crate::Blog;

/// List blog content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    for line in render(blog, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Produce the listing lines for a content type
pub fn render(blog: &Blog, content_type: &str) -> Result<Vec<String>> {
    let posts = PostLoader::new(blog).load_posts()?;
    let index = PostIndex::build(&posts);

    let lines = match content_type {
        "post" | "posts" => {
            let mut lines = vec![format!("Posts ({}):", index.len())];
            for entry in index.entries() {
                lines.push(format!(
                    "  {} - {} [{}]",
                    display(&entry.date),
                    display(&entry.title),
                    entry.filename
                ));
            }
            lines
        }
        "tag" | "tags" => counted("Tags", index.entries(), |e| e.tags.to_string_list()),
        "category" | "categories" => counted("Categories", index.entries(), |e| {
            e.category.to_string_list()
        }),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category",
                content_type
            );
        }
    };

    Ok(lines)
}

/// Count names across entries, most frequent first
fn counted<F>(heading: &str, entries: &[IndexEntry], names: F) -> Vec<String>
where
    F: Fn(&IndexEntry) -> Vec<String>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for entry in entries {
        for name in names(entry) {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut lines = vec![format!("{} ({}):", heading, counts.len())];
    lines.extend(
        counts
            .into_iter()
            .map(|(name, count)| format!("  {} ({})", name, count)),
    );
    lines
}

fn display(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) if s.is_empty() => "----------".to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::List(_) => value.to_string_list().join(", "),
    }
}
