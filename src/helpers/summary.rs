//! Post summary helpers: excerpts and category guessing

use lazy_static::lazy_static;
use regex::Regex;

/// Default excerpt length, in characters
pub const EXCERPT_LENGTH: usize = 150;

const TECH_TAGS: [&str; 9] = [
    "programming",
    "javascript",
    "python",
    "web development",
    "software",
    "coding",
    "technology",
    "ai",
    "machine learning",
];

const LIFE_TAGS: [&str; 5] = [
    "life",
    "productivity",
    "career",
    "personal growth",
    "leadership",
];

/// Pick a category from a post's tags
///
/// Technology tags win over life tags; anything else is `General`.
pub fn determine_category(tags: &[String]) -> &'static str {
    let tags: Vec<String> = tags.iter().map(|t| t.trim().to_lowercase()).collect();
    let has_any = |known: &[&str]| known.iter().any(|k| tags.iter().any(|t| t == k));

    if has_any(&TECH_TAGS[..]) {
        "Technology"
    } else if has_any(&LIFE_TAGS[..]) {
        "Life"
    } else {
        "General"
    }
}

/// Plain-text excerpt of markdown content
///
/// Headings markers, emphasis and inline code are stripped and newlines
/// become spaces. Text longer than `max_length` characters is cut at the last
/// word boundary and ends with `...`.
pub fn generate_excerpt(content: &str, max_length: usize) -> String {
    lazy_static! {
        static ref HEADING: Regex = Regex::new(r"#{1,6}\s").unwrap();
        static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
        static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").unwrap();
        static ref CODE: Regex = Regex::new(r"`(.*?)`").unwrap();
        static ref NEWLINE: Regex = Regex::new(r"\r?\n").unwrap();
        static ref TRAILING_WORD: Regex = Regex::new(r"\s+\S*$").unwrap();
    }

    let plain = HEADING.replace_all(content, "");
    let plain = BOLD.replace_all(&plain, "$1");
    let plain = ITALIC.replace_all(&plain, "$1");
    let plain = CODE.replace_all(&plain, "$1");
    let plain = NEWLINE.replace_all(&plain, " ");
    let plain = plain.trim();

    if plain.chars().count() <= max_length {
        return plain.to_string();
    }

    let cut: String = plain.chars().take(max_length).collect();
    if TRAILING_WORD.is_match(&cut) {
        TRAILING_WORD.replace(&cut, "...").trim().to_string()
    } else {
        format!("{}...", cut.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_determine_category() {
        assert_eq!(determine_category(&tags(&["Rust", "Python"])), "Technology");
        assert_eq!(determine_category(&tags(&["Machine Learning"])), "Technology");
        assert_eq!(determine_category(&tags(&["Career", "AI"])), "Technology");
        assert_eq!(determine_category(&tags(&["productivity"])), "Life");
        assert_eq!(determine_category(&tags(&["travel"])), "General");
        assert_eq!(determine_category(&[]), "General");
    }

    #[test]
    fn test_excerpt_strips_markdown() {
        let content = "# Title\n\nSome **bold** and *italic* with `code`.";
        assert_eq!(
            generate_excerpt(content, EXCERPT_LENGTH),
            "Title  Some bold and italic with code."
        );
    }

    #[test]
    fn test_excerpt_cuts_at_word_boundary() {
        let content = "word ".repeat(40);
        let excerpt = generate_excerpt(&content, EXCERPT_LENGTH);
        assert!(excerpt.ends_with("word..."));
        assert!(excerpt.chars().count() <= EXCERPT_LENGTH + 3);

        assert_eq!(generate_excerpt("alpha beta gamma", 13), "alpha beta...");
    }

    #[test]
    fn test_excerpt_without_spaces() {
        assert_eq!(generate_excerpt("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_excerpt_counts_characters() {
        let content = "你好世界 你好世界";
        assert_eq!(generate_excerpt(content, 20), content);
        assert_eq!(generate_excerpt(content, 6), "你好世界...");
    }
}
