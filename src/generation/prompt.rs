//! The fixed prompt template sent to the generation backend.

use crate::error::AppError;
use handlebars::Handlebars;
use serde_json::json;

const TEMPLATE_NAME: &str = "article";

const ARTICLE_TEMPLATE: &str = r#"
Create blog article on "{{title}}" targeted at developers and students and working professionals.
- Use markdown formatting: headings (#),
- bullet points,
- and code blocks (```python).
- Keep it 800 to 1200 words.
- Don't use emojis.
"#;

/// Handlebars-backed renderer for the article prompt.
pub struct ArticlePrompt {
    engine: Handlebars<'static>,
}

impl ArticlePrompt {
    pub fn new() -> Result<Self, AppError> {
        let mut engine = Handlebars::new();
        // Titles go to a language model, not a browser
        engine.register_escape_fn(handlebars::no_escape);
        engine
            .register_template_string(TEMPLATE_NAME, ARTICLE_TEMPLATE)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { engine })
    }

    pub fn render(&self, title: &str) -> Result<String, AppError> {
        self.engine
            .render(TEMPLATE_NAME, &json!({ "title": title }))
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })
    }
}
