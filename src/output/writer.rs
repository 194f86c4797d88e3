//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where file I/O operations occur,
//! keeping the rest of the codebase pure and testable.

use super::paths::article_file_name;
use crate::error::AppError;
use crate::types::RenderedPost;
use std::path::{Path, PathBuf};

/// Writes `title` immediately followed by `html` to `dir/<sanitized title>`.
///
/// The directory is created if missing. An existing file with the same
/// sanitized name is overwritten.
pub async fn write_article(
    dir: &Path,
    title: &str,
    html: &RenderedPost,
) -> Result<PathBuf, AppError> {
    let path = dir.join(article_file_name(title));

    let mut content = String::with_capacity(title.len() + html.len());
    content.push_str(title);
    content.push_str(html.as_str());

    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, content).await?;

    log::info!("Wrote file: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_title_then_html_without_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let html = RenderedPost::new("<p>body</p>".to_string());

        let path = write_article(dir.path(), "My: Title", &html).await.unwrap();

        assert_eq!(path, dir.path().join("My_ Title"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "My: Title<p>body</p>");
    }

    #[tokio::test]
    async fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("articles");
        let html = RenderedPost::new(String::new());

        let path = write_article(&nested, "Title", &html).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn colliding_titles_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let first = RenderedPost::new("first".to_string());
        let second = RenderedPost::new("second".to_string());

        let a = write_article(dir.path(), "A/B", &first).await.unwrap();
        let b = write_article(dir.path(), "A:B", &second).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(std::fs::read_to_string(b).unwrap(), "A:Bsecond");
    }
}
