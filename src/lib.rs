// src/lib.rs
//! article2post library — generates blog articles from titles and publishes
//! them to WordPress.com.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `PublishConfig`
//! - **Authentication** — `OAuthClient`, `OAuthCredentials`
//! - **Platform API** — `WordPressClient`, `SiteDirectory`, `PostPublisher`
//! - **Generation** — `GeminiClient`, `ArticleGenerator`, `TextGenerator`
//! - **Formatting** — `HtmlConverter`, `PlatformProfile`, `TagRule`
//! - **Output** — `sanitize_filename`, `write_article`
//! - **Pipeline** — `PublishPipeline`, `BatchReport`, `ArticleOutcome`

pub mod api;
pub mod auth;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod generation;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PublishConfig};

// --- Domain Model ---
pub use crate::model::{GeneratedArticle, PublishResult, Site, SiteList};

// --- Domain Types ---
pub use crate::types::{
    AccessToken, ApiKey, AuthorizationCode, ClientId, ClientSecret, ModelName, RenderedPost,
    SiteId, ValidatedUrl,
};

// --- Authentication ---
pub use crate::auth::{OAuthClient, OAuthCredentials};

// --- Platform API ---
pub use crate::api::{
    client::ApiResponse, format_site_list, select_site, PostPublisher, SiteDirectory,
    WordPressClient,
};

// --- Generation ---
pub use crate::generation::{ArticleGenerator, ArticlePrompt, GeminiClient, TextGenerator};

// --- Formatting ---
pub use crate::formatting::{
    markdown_to_wp_html, render_markdown, HtmlConverter, PlatformProfile, TagRule,
    WORDPRESS_BLOCK_EDITOR,
};

// --- Output ---
pub use crate::output::{article_file_name, sanitize_filename, sanitize_filename_with, write_article};

// --- Pipeline ---
pub use crate::pipeline::{
    ArticleOutcome, ArticleSource, BatchReport, PostRenderer, PublishPipeline, PublishSession,
    PublishedArticle,
};

// --- Console ---
pub use crate::console::Terminal;
