//! Site listing and the ordinal selection the user makes from it.

use super::client::{extract_response_text, WordPressClient};
use super::SiteDirectory;
use crate::error::AppError;
use crate::model::{Site, SiteList};
use crate::types::AccessToken;

#[async_trait::async_trait]
impl SiteDirectory for WordPressClient {
    async fn list_sites(&self, token: &AccessToken) -> Result<Vec<Site>, AppError> {
        let response = self.get("me/sites", token).await?;
        let result = extract_response_text(response).await?.error_for_status()?;
        let list: SiteList = serde_json::from_str(&result.data)?;
        log::info!("Found {} site(s)", list.sites.len());
        Ok(list.sites)
    }
}

/// Renders the numbered list shown before the selection prompt.
pub fn format_site_list(sites: &[Site]) -> String {
    sites
        .iter()
        .enumerate()
        .map(|(i, site)| format!("{}. {} — {}\n", i + 1, site.name, site.url))
        .collect()
}

/// Resolves a 1-based ordinal typed by the user to a site.
///
/// Non-numeric and out-of-range input is an error; the caller does not
/// prompt again.
pub fn select_site<'a>(sites: &'a [Site], input: &str) -> Result<&'a Site, AppError> {
    let invalid = || AppError::InvalidSelection {
        input: input.trim().to_string(),
        available: sites.len(),
    };

    let ordinal: usize = input.trim().parse().map_err(|_| invalid())?;
    ordinal
        .checked_sub(1)
        .and_then(|index| sites.get(index))
        .ok_or_else(invalid)
}
