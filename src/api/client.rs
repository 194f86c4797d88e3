// src/api/client.rs
//! Pure HTTP client wrapper for the WordPress.com REST API.
//!
//! This module provides a thin wrapper around reqwest for making
//! authenticated requests. It handles bearer authentication and
//! basic request/response operations without parsing or business logic.

use crate::constants::WPCOM_REST_BASE_URL;
use crate::error::AppError;
use crate::types::AccessToken;
use reqwest::{Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for WordPress.com REST requests.
#[derive(Clone)]
pub struct WordPressClient {
    client: Client,
    base_url: String,
}

impl WordPressClient {
    /// Creates a client against the public REST endpoint.
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, WPCOM_REST_BASE_URL)
    }

    /// Creates a client against an explicit base URL.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Makes an authenticated GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (without base URL)
    /// * `token` - Bearer credential for the request
    pub async fn get(&self, endpoint: &str, token: &AccessToken) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);
        Ok(self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?)
    }

    /// Makes an authenticated POST request with JSON body to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (without base URL)
    /// * `body` - The request body to serialize as JSON
    /// * `token` - Bearer credential for the request
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
        token: &AccessToken,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await?;
        log::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

impl ApiResponse<String> {
    /// Turns a non-success status into [`AppError::PlatformService`].
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            log::debug!("{} returned {}", self.url, self.status);
            Err(AppError::PlatformService {
                status: self.status,
                body: self.data,
            })
        }
    }
}

/// Extracts the response body as text with metadata.
///
/// # Arguments
///
/// * `response` - The HTTP response to extract text from
///
/// # Returns
///
/// An `ApiResponse<String>` containing the response text along with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
