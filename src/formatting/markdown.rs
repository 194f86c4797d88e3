//! Markdown to HTML rendering.

use pulldown_cmark::{html, Options, Parser};

/// Renders CommonMark (plus tables and strikethrough) to an HTML fragment.
/// Fenced code blocks become `<pre><code class="language-x">`.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_code_renders_as_pre_code() {
        let html = render_markdown("```rust\nlet x = 1;\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>\n"
        );
    }

    #[test]
    fn unterminated_fence_still_renders() {
        let html = render_markdown("```\nnever closed");
        assert!(html.starts_with("<pre><code>"));
    }
}
