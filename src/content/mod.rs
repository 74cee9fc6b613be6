//! Content module - handles posts, front matter and the post index

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{FieldValue, FrontMatter};
pub use post::{IndexEntry, PostIndex, PostRecord, OUTPUT_EXT};
