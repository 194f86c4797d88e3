//! Post creation.

use super::client::{extract_response_text, WordPressClient};
use super::PostPublisher;
use crate::constants::POST_STATUS_PUBLISH;
use crate::error::AppError;
use crate::model::PublishResult;
use crate::types::{AccessToken, RenderedPost, SiteId};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct NewPost<'a> {
    title: &'a str,
    content: &'a str,
    status: &'a str,
}

#[derive(Deserialize)]
struct CreatedPost {
    #[serde(rename = "URL")]
    url: String,
}

#[async_trait::async_trait]
impl PostPublisher for WordPressClient {
    async fn publish(
        &self,
        site: SiteId,
        title: &str,
        html: &RenderedPost,
        token: &AccessToken,
    ) -> Result<PublishResult, AppError> {
        let endpoint = format!("sites/{}/posts/new", site);
        let body = NewPost {
            title,
            content: html.as_str(),
            status: POST_STATUS_PUBLISH,
        };

        let response = self.post(&endpoint, &body, token).await?;
        let result = extract_response_text(response).await?;

        if !result.status.is_success() {
            log::warn!("Post '{}' rejected with {}", title, result.status);
            return Ok(PublishResult::Rejected {
                status: result.status,
                body: result.data,
            });
        }

        let created: CreatedPost = serde_json::from_str(&result.data)?;
        Ok(PublishResult::Published { url: created.url })
    }
}
