// src/pipeline.rs
//! The publish pipeline — title in, confirmed remote post out.
//!
//! Each title runs generate → render → write → publish strictly in order.
//! Titles run concurrently on a single task: [`PublishPipeline::run_all`]
//! starts every instance before awaiting any, so backend latency overlaps,
//! and collects one tagged [`ArticleOutcome`] per title. A failing instance
//! never cancels its siblings.

use crate::api::PostPublisher;
use crate::error::AppError;
use crate::model::{GeneratedArticle, PublishResult};
use crate::output::write_article;
use crate::types::{AccessToken, RenderedPost, SiteId};
use futures::future::join_all;
use std::path::{Path, PathBuf};

/// Produces an article for a requested title.
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    async fn generate(&self, title: &str) -> Result<GeneratedArticle, AppError>;
}

/// Transforms a generated article into platform HTML.
pub trait PostRenderer: Send + Sync {
    fn render(&self, article: &GeneratedArticle) -> RenderedPost;
}

/// Read-only values every pipeline instance of a run shares.
#[derive(Debug, Clone)]
pub struct PublishSession {
    pub token: AccessToken,
    pub site: SiteId,
}

/// What one instance produced once its file was written.
#[derive(Debug, Clone)]
pub struct PublishedArticle {
    pub title: String,
    pub file: PathBuf,
    pub publish: PublishResult,
}

/// One instance's tagged result, keyed by the title that was requested.
#[derive(Debug)]
pub struct ArticleOutcome {
    pub requested_title: String,
    pub result: Result<PublishedArticle, AppError>,
}

/// Tally of a batch, in completion-independent submission order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ArticleOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Instances that ended before their file was written or whose publish
    /// call could not be made.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Instances whose post went live.
    pub fn published(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(article) if article.publish.is_published()))
            .count()
    }

    /// Instances whose post the platform refused.
    pub fn rejected(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(article) if !article.publish.is_published()))
            .count()
    }

    /// Fails with [`AppError::BatchIncomplete`] if any instance failed.
    pub fn into_result(self) -> Result<Self, AppError> {
        match self.failed() {
            0 => Ok(self),
            failed => Err(AppError::BatchIncomplete {
                failed,
                total: self.total(),
            }),
        }
    }
}

/// Composes the stages for a run. Borrowed collaborators are constructed
/// once at startup and shared by every instance.
pub struct PublishPipeline<'a> {
    source: &'a dyn ArticleSource,
    renderer: &'a dyn PostRenderer,
    publisher: &'a dyn PostPublisher,
    session: &'a PublishSession,
    output_dir: &'a Path,
}

impl<'a> PublishPipeline<'a> {
    pub fn new(
        source: &'a dyn ArticleSource,
        renderer: &'a dyn PostRenderer,
        publisher: &'a dyn PostPublisher,
        session: &'a PublishSession,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            source,
            renderer,
            publisher,
            session,
            output_dir,
        }
    }

    /// Runs one instance per title concurrently and waits for all of them.
    pub async fn run_all(&self, titles: &[String]) -> BatchReport {
        let instances = titles.iter().map(|title| async move {
            let result = self.run_one(title).await;
            if let Err(e) = &result {
                log::error!("Article for ({}) failed: {}", title, e);
            }
            ArticleOutcome {
                requested_title: title.clone(),
                result,
            }
        });

        let report = BatchReport {
            outcomes: join_all(instances).await,
        };

        log::info!(
            "Batch complete: {} published, {} rejected, {} failed of {}",
            report.published(),
            report.rejected(),
            report.failed(),
            report.total()
        );
        report
    }

    /// Runs the stages for a single title.
    ///
    /// A generation or write failure returns `Err` before publishing is
    /// attempted. A rejected post is still `Ok`: the file already exists.
    pub async fn run_one(&self, title: &str) -> Result<PublishedArticle, AppError> {
        log::info!("Generating article for ({}) ...", title);
        let article = self.source.generate(title).await?;

        log::info!("Converting the generated article to HTML ({}) ...", title);
        let html = self.renderer.render(&article);

        let file = write_article(self.output_dir, &article.title, &html).await?;
        log::info!("Saved content to file ({}) --> {}", title, file.display());

        log::info!("Uploading to WordPress ({}) ...", title);
        let publish = self
            .publisher
            .publish(self.session.site, &article.title, &html, &self.session.token)
            .await?;

        match &publish {
            PublishResult::Published { url } => {
                println!("\nArticle posted at: {}", url);
            }
            PublishResult::Rejected { status, body } => {
                println!("Failed to post ({}): {}", title, status);
                println!("{}", body);
            }
        }

        log::info!("Finished ({})", title);
        Ok(PublishedArticle {
            title: article.title,
            file,
            publish,
        })
    }
}
