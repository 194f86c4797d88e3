use crate::types::SiteId;
use serde::Deserialize;

/// A WordPress.com site the authenticated user can publish to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Site {
    #[serde(rename = "ID")]
    pub id: SiteId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "URL", default)]
    pub url: String,
}

/// Body of `GET /me/sites`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteList {
    pub sites: Vec<Site>,
}
