//! Post records and the post index

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{FieldValue, FrontMatter};
use crate::helpers;

/// Keys owned by the record itself; front matter cannot override them
const STRUCTURAL_KEYS: [&str; 2] = ["filename", "content"];

/// Extension of the generated per-post files
pub const OUTPUT_EXT: &str = "json";

/// The full JSON representation of one post
///
/// Serializes as `filename`, then every front-matter field in source order,
/// then `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Source file name, e.g. `hello-world.md`
    pub filename: String,

    /// Front-matter fields
    #[serde(flatten)]
    pub front_matter: FrontMatter,

    /// Post body with the front matter removed
    pub content: String,
}

impl PostRecord {
    /// Build a record from a source file name and its parsed parts
    pub fn new(filename: impl Into<String>, mut front_matter: FrontMatter, body: &str) -> Self {
        let filename = filename.into();

        for key in STRUCTURAL_KEYS {
            if front_matter.remove(key).is_some() {
                tracing::warn!(
                    "{}: front-matter key '{}' is reserved and was ignored",
                    filename,
                    key
                );
            }
        }

        Self {
            filename,
            front_matter,
            content: body.to_string(),
        }
    }

    /// File name of the generated JSON record, e.g. `hello-world.json`
    pub fn output_filename(&self) -> String {
        output_filename(&self.filename)
    }

    /// Project this record into an index entry
    pub fn to_index_entry(&self) -> IndexEntry {
        let field = |key: &str, default: FieldValue| {
            self.front_matter.get(key).cloned().unwrap_or(default)
        };

        IndexEntry {
            filename: self.output_filename(),
            title: field("title", FieldValue::from("Untitled")),
            date: field("date", FieldValue::from("")),
            category: field("category", FieldValue::from("General")),
            excerpt: field("excerpt", FieldValue::from("")),
            tags: field("tags", FieldValue::List(Vec::new())),
        }
    }
}

/// Swap the source extension for the output one
fn output_filename(source: &str) -> String {
    Path::new(source)
        .with_extension(OUTPUT_EXT)
        .to_string_lossy()
        .to_string()
}

/// Summary of a post as listed in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub filename: String,
    pub title: FieldValue,
    pub date: FieldValue,
    pub category: FieldValue,
    pub excerpt: FieldValue,
    pub tags: FieldValue,
}

impl IndexEntry {
    /// Key used for ordering; non-string dates sort as empty
    pub fn date_key(&self) -> &str {
        self.date.as_str().unwrap_or("")
    }

    /// Whether the date orders correctly as plain text
    pub fn has_sortable_date(&self) -> bool {
        match &self.date {
            FieldValue::Text(date) => helpers::is_sortable_date(date),
            FieldValue::List(_) => false,
        }
    }
}

/// All index entries, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostIndex {
    entries: Vec<IndexEntry>,
}

impl PostIndex {
    /// Build the index from post records
    ///
    /// Dates are compared as plain strings, so only zero-padded ISO-like
    /// dates sort chronologically. Entries with equal dates keep input order.
    pub fn build<'a>(posts: impl IntoIterator<Item = &'a PostRecord>) -> Self {
        let mut entries: Vec<IndexEntry> = posts
            .into_iter()
            .map(PostRecord::to_index_entry)
            .collect();
        entries.sort_by(|a, b| b.date_key().cmp(a.date_key()));
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
