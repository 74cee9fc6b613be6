//! Front-matter parsing
//!
//! Posts may start with a `---` delimited header made of `key: value` lines.
//! This is deliberately not YAML: every line is split on its first colon, and
//! bracketed values get a best-effort JSON array parse.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delimiter line that opens and closes the header block
const DELIMITER: &str = "---";

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A bracketed value that parsed as a JSON array
    List(Vec<Value>),
    /// Anything else, with one layer of quotes removed
    Text(String),
}

impl FieldValue {
    /// Coerce a raw header value
    fn from_raw(raw: &str) -> Self {
        let value = strip_quotes(raw.trim());

        if value.starts_with('[') && value.ends_with(']') {
            if let Ok(items) = serde_json::from_str::<Vec<Value>>(value) {
                return FieldValue::List(items);
            }
            tracing::debug!("Keeping unparseable array value as text: {}", value);
        }

        FieldValue::Text(value.to_string())
    }

    /// The string form, if this is a plain value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Items as strings; a plain value counts as a single item
    pub fn to_string_list(&self) -> Vec<String> {
        match self {
            FieldValue::Text(s) if s.is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Front-matter data from a post, in the order the keys appeared
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, FieldValue>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// Without a leading delimiter line, or without a closing one, the whole
    /// text is the body and the header is empty.
    pub fn parse(content: &str) -> (Self, &str) {
        match split_header(content) {
            Some((header, body)) => (Self::parse_header(header), body.trim()),
            None => (FrontMatter::default(), content.trim()),
        }
    }

    fn parse_header(header: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in header.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            fields.insert(key.trim().to_string(), FieldValue::from_raw(value));
        }

        Self { fields }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Look up a plain string field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_str)
    }

    /// Remove a field, preserving the order of the others
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split the leading header segment from the body
///
/// The header ends at the first line that is exactly the delimiter.
fn split_header(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Remove one layer of matching quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_frontmatter() {
        let content = r#"---
title: "Hello World"
date: 2024-01-15
category: 'Rust'
tags: ["rust", "blog"]
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(
            fm.keys().collect::<Vec<_>>(),
            vec!["title", "date", "category", "tags"]
        );
        assert_eq!(fm.get_str("title"), Some("Hello World"));
        assert_eq!(fm.get_str("date"), Some("2024-01-15"));
        assert_eq!(fm.get_str("category"), Some("Rust"));
        assert_eq!(
            fm.get("tags"),
            Some(&FieldValue::List(vec![json!("rust"), json!("blog")]))
        );
        assert_eq!(body, "This is the content.");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "\n  # Title\n\ntitle: not a header\n---\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, "# Title\n\ntitle: not a header\n---");
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Draft\nno closing line";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_closing_delimiter_at_end_of_file() {
        let (fm, body) = FrontMatter::parse("---\ntitle: A\n---");
        assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["title"]);
        assert_eq!(fm.get_str("title"), Some("A"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_empty_header() {
        let (fm, body) = FrontMatter::parse("---\n---\n\n  body  \n");
        assert!(fm.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_first_closing_delimiter_wins() {
        let content = "---\ntitle: A\n---\nbody\n---\nmore: stuff\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.len(), 1);
        assert_eq!(body, "body\n---\nmore: stuff");
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let content = "---\ntitle: A\njust some words\n\nauthor: B\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["title", "author"]);
    }

    #[test]
    fn test_value_splits_on_first_colon() {
        let content = "---\nlink: https://example.com:8080/a\ntime: 10:30\n---\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get_str("link"), Some("https://example.com:8080/a"));
        assert_eq!(fm.get_str("time"), Some("10:30"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_array_coercion() {
        let content = "---\nnums: \"[1, 2]\"\nbroken: [unclosed\nodd: [a, b]\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(
            fm.get("nums"),
            Some(&FieldValue::List(vec![json!(1), json!(2)]))
        );
        assert_eq!(fm.get_str("broken"), Some("[unclosed"));
        assert_eq!(fm.get_str("odd"), Some("[a, b]"));
    }

    #[test]
    fn test_single_quote_layer_stripped() {
        let content = "---\na: \"\"quoted\"\"\nb: 'it's'\nc: \"\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get_str("a"), Some("\"quoted\""));
        assert_eq!(fm.get_str("b"), Some("it's"));
        assert_eq!(fm.get_str("c"), Some("\""));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody text\r\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get_str("title"), Some("Windows"));
        assert_eq!(body, "Body text");
    }

    #[test]
    fn test_repeated_key_keeps_position() {
        let content = "---\ntitle: First\ndate: 2024-01-01\ntitle: Second\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.keys().collect::<Vec<_>>(), vec!["title", "date"]);
        assert_eq!(fm.get_str("title"), Some("Second"));
    }

    #[test]
    fn test_non_ascii() {
        let content = "---\ntitle: 你好，世界\n---\n最近用 AI 写代码";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get_str("title"), Some("你好，世界"));
        assert_eq!(body, "最近用 AI 写代码");
    }

    #[test]
    fn test_string_list() {
        assert_eq!(
            FieldValue::List(vec![json!("a"), json!(2)]).to_string_list(),
            vec!["a", "2"]
        );
        assert_eq!(FieldValue::from("solo").to_string_list(), vec!["solo"]);
        assert!(FieldValue::from("").to_string_list().is_empty());
    }
}
