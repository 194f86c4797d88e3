//! Article generation — turns a requested title into a [`GeneratedArticle`].
//!
//! The backend is reached through [`TextGenerator`]; everything here except
//! the backend call is pure.

mod gemini;
mod prompt;

pub use gemini::GeminiClient;
pub use prompt::ArticlePrompt;

use crate::error::AppError;
use crate::model::GeneratedArticle;
use crate::pipeline::ArticleSource;

/// The ability to turn a prompt into generated text in a single call.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Builds the article prompt, calls the backend, splits the answer.
pub struct ArticleGenerator<'a> {
    backend: &'a dyn TextGenerator,
    prompt: ArticlePrompt,
}

impl<'a> ArticleGenerator<'a> {
    pub fn new(backend: &'a dyn TextGenerator) -> Result<Self, AppError> {
        Ok(Self {
            backend,
            prompt: ArticlePrompt::new()?,
        })
    }
}

#[async_trait::async_trait]
impl ArticleSource for ArticleGenerator<'_> {
    async fn generate(&self, title: &str) -> Result<GeneratedArticle, AppError> {
        let prompt = self.prompt.render(title)?;
        let text = self.backend.generate(&prompt).await?;
        log::debug!("Backend returned {} bytes for '{}'", text.len(), title);
        Ok(GeneratedArticle::from_generated(title, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl TextGenerator for Recording {
        async fn generate(&self, prompt: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn prompt_names_the_title_and_reply_is_split() {
        let backend = Recording {
            reply: "# Generated Title\nfirst\nsecond".to_string(),
            prompts: Mutex::new(Vec::new()),
        };
        let generator = ArticleGenerator::new(&backend).unwrap();

        let article = generator.generate("Async Rust").await.unwrap();

        assert_eq!(article.title, "Generated Title");
        assert_eq!(article.body, "first\nsecond");
        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"Async Rust\""));
    }
}
