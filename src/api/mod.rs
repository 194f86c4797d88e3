//! WordPress.com REST interaction — listing sites and creating posts.
//!
//! Business logic depends on the [`SiteDirectory`] and [`PostPublisher`]
//! traits, never on HTTP details.

pub mod client;
mod posts;
mod sites;

use crate::error::AppError;
use crate::model::{PublishResult, Site};
use crate::types::{AccessToken, RenderedPost, SiteId};

/// The ability to enumerate the sites a token can publish to.
#[async_trait::async_trait]
pub trait SiteDirectory: Send + Sync {
    async fn list_sites(&self, token: &AccessToken) -> Result<Vec<Site>, AppError>;
}

/// The ability to create a published post on a site.
///
/// A non-success response is a [`PublishResult::Rejected`], not an `Err`;
/// `Err` is reserved for transport failures.
#[async_trait::async_trait]
pub trait PostPublisher: Send + Sync {
    async fn publish(
        &self,
        site: SiteId,
        title: &str,
        html: &RenderedPost,
        token: &AccessToken,
    ) -> Result<PublishResult, AppError>;
}

// Re-export the public interface
pub use client::WordPressClient;
pub use sites::{format_site_list, select_site};
