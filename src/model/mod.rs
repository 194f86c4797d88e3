//! Domain model — the entities a run passes from stage to stage.
//!
//! A run enumerates [`Site`]s once, then turns each requested title into a
//! [`GeneratedArticle`], renders it, writes it, and ends with one
//! [`PublishResult`].

mod article;
mod site;

pub use article::{GeneratedArticle, PublishResult};
pub use site::{Site, SiteList};
