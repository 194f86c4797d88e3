use reqwest::StatusCode;

/// Generated text split into a title and a markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArticle {
    pub title: String,
    pub body: String,
}

impl GeneratedArticle {
    /// Splits backend output into title and body.
    ///
    /// A leading `#` heading supplies the title and is removed from the body.
    /// Without one, `requested_title` is kept verbatim and the body is the
    /// full response.
    pub fn from_generated(requested_title: &str, text: &str) -> Self {
        let trimmed = text.trim();
        let mut lines = trimmed.split('\n');

        match lines.next() {
            Some(first) if first.starts_with('#') => {
                let heading = first.trim_start_matches('#').trim();
                let title = if heading.is_empty() {
                    requested_title.to_string()
                } else {
                    heading.to_string()
                };
                Self {
                    title,
                    body: lines.collect::<Vec<_>>().join("\n"),
                }
            }
            _ => Self {
                title: requested_title.to_string(),
                body: text.to_string(),
            },
        }
    }
}

/// Terminal outcome of submitting one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishResult {
    /// The post is live at `url`.
    Published { url: String },
    /// The platform refused the post. Reported, never raised.
    Rejected { status: StatusCode, body: String },
}

impl PublishResult {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}
