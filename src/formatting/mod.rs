// src/formatting/mod.rs
//! Converts generated markdown into the HTML a publishing platform expects.
//!
//! Conversion is a pure transform: render markdown, parse the result into a
//! tree, rewrite tags according to a [`PlatformProfile`], serialize.

mod markdown;
mod rules;
mod rewrite;

pub use self::markdown::render_markdown;
pub use self::rules::{PlatformProfile, TagRule, WORDPRESS_BLOCK_EDITOR};

use crate::model::GeneratedArticle;
use crate::pipeline::PostRenderer;
use crate::types::RenderedPost;

/// Renders markdown and rewrites the HTML for one target platform.
#[derive(Debug, Clone, Copy)]
pub struct HtmlConverter {
    profile: &'static PlatformProfile,
}

impl HtmlConverter {
    pub fn new(profile: &'static PlatformProfile) -> Self {
        Self { profile }
    }

    /// Converter for the WordPress block editor.
    pub fn wordpress() -> Self {
        Self::new(&WORDPRESS_BLOCK_EDITOR)
    }

    /// Converts markdown text to platform HTML. Never fails; malformed
    /// markdown renders best-effort.
    pub fn convert(&self, markdown: &str) -> RenderedPost {
        let html = render_markdown(markdown);
        let rewritten = rewrite::rewrite_fragment(&html, self.profile.rules);
        log::debug!(
            "Converted {} bytes of markdown to {} bytes of {} HTML",
            markdown.len(),
            rewritten.len(),
            self.profile.name
        );
        RenderedPost::new(rewritten)
    }
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self::wordpress()
    }
}

impl PostRenderer for HtmlConverter {
    fn render(&self, article: &GeneratedArticle) -> RenderedPost {
        self.convert(&article.body)
    }
}

/// Converts markdown with the WordPress block editor profile.
pub fn markdown_to_wp_html(markdown: &str) -> RenderedPost {
    HtmlConverter::wordpress().convert(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_lists_and_code_get_block_classes() {
        let md = "# Heading\n\n- item1\n- item2\n\n```\ncode\n```";
        let html = markdown_to_wp_html(md);
        let html = html.as_str();

        assert!(html.contains(r#"<h5 class="wp-block-heading">Heading</h5>"#), "{html}");
        assert!(html.contains(r#"<ul class="wp-block-list">"#), "{html}");
        assert!(html.contains(r#"<pre class="wp-block-code"><code>code"#), "{html}");
        assert!(!html.contains("<h1"), "{html}");
    }

    #[test]
    fn every_heading_level_is_normalized() {
        let md = "# a\n\n## b\n\n### c\n\n#### d\n\n##### e\n\n###### f\n";
        let html = markdown_to_wp_html(md);
        assert_eq!(html.as_str().matches(r#"<h5 class="wp-block-heading">"#).count(), 6);
        for level in ["<h1", "<h2", "<h3", "<h4", "<h6"] {
            assert!(!html.as_str().contains(level));
        }
    }

    #[test]
    fn fenced_language_class_is_kept_on_code() {
        let md = "```python\nprint('hi')\n```\n";
        let html = markdown_to_wp_html(md);
        assert!(html
            .as_str()
            .contains(r#"<pre class="wp-block-code"><code class="language-python">print('hi')"#));
    }

    #[test]
    fn bare_pre_block_gains_code_child() {
        let md = "<pre>raw text</pre>\n";
        let html = markdown_to_wp_html(md);
        assert!(html
            .as_str()
            .contains(r#"<pre class="wp-block-code"><code>raw text</code></pre>"#));
    }

    #[test]
    fn existing_classes_are_preserved() {
        let md = "<h2 class=\"intro\">Hi</h2>\n";
        let html = markdown_to_wp_html(md);
        assert!(html
            .as_str()
            .contains(r#"<h5 class="intro wp-block-heading">Hi</h5>"#));
    }

    #[test]
    fn ordered_lists_are_untouched() {
        let html = markdown_to_wp_html("1. one\n2. two\n");
        assert!(html.as_str().contains("<ol>"));
        assert!(!html.as_str().contains("wp-block-list"));
    }

    #[test]
    fn text_is_escaped_on_output() {
        let html = markdown_to_wp_html("Use `a < b && c`\n");
        assert!(html.as_str().contains("<code>a &lt; b &amp;&amp; c</code>"));
    }

    #[test]
    fn conversion_is_deterministic() {
        let md = "## Title\n\n* one\n* two\n\n```rust\nfn main() {}\n```\n";
        assert_eq!(markdown_to_wp_html(md), markdown_to_wp_html(md));
    }
}
