//! Clean generated files

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Remove the per-post output directory and the index file
pub fn run(blog: &Blog) -> Result<()> {
    if blog.output_dir.exists() {
        fs::remove_dir_all(&blog.output_dir)?;
        tracing::info!("Deleted: {:?}", blog.output_dir);
    }

    if blog.index_path.exists() {
        fs::remove_file(&blog.index_path)?;
        tracing::info!("Deleted: {:?}", blog.index_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_outputs_only() {
        let temp = TempDir::new().unwrap();
        let blog = Blog::with_config(temp.path().to_path_buf(), BlogConfig::default());
        fs::create_dir_all(&blog.posts_dir).unwrap();
        fs::write(blog.posts_dir.join("keep.md"), "keep").unwrap();

        blog.convert().unwrap();
        assert!(blog.index_path.exists());

        run(&blog).unwrap();
        assert!(!blog.output_dir.exists());
        assert!(!blog.index_path.exists());
        assert!(blog.posts_dir.join("keep.md").exists());

        // Nothing left to delete
        run(&blog).unwrap();
    }
}
