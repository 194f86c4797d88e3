use crate::api::client::extract_response_text;
use crate::console::Terminal;
use crate::constants::{OAUTH_SCOPE, WPCOM_OAUTH_BASE_URL};
use crate::error::AppError;
use crate::types::{AccessToken, AuthorizationCode, ClientId, ClientSecret, ValidatedUrl};
use reqwest::Client;
use serde::Deserialize;
use std::io::{BufRead, Write};
use url::Url;

/// Everything the OAuth application was registered with.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub redirect_uri: ValidatedUrl,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Drives the authorization-code flow against the WordPress.com endpoints.
pub struct OAuthClient {
    client: Client,
    base_url: String,
    credentials: OAuthCredentials,
}

impl OAuthClient {
    pub fn new(client: Client, credentials: OAuthCredentials) -> Self {
        Self::with_base_url(client, credentials, WPCOM_OAUTH_BASE_URL)
    }

    pub fn with_base_url(
        client: Client,
        credentials: OAuthCredentials,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// The URL the user opens to grant access.
    pub fn authorization_url(&self) -> Result<Url, AppError> {
        let url = Url::parse_with_params(
            &format!("{}/authorize", self.base_url),
            &[
                ("client_id", self.credentials.client_id.as_str()),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", OAUTH_SCOPE),
            ],
        )?;
        Ok(url)
    }

    /// Opens the authorization page and waits for the user to paste back the
    /// `code` from the redirected URL (or the whole URL).
    pub fn acquire_authorization_code<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> Result<AuthorizationCode, AppError> {
        let url = self.authorization_url()?;

        terminal.say("Opening browser to authorize...")?;
        if let Err(e) = open::that(url.as_str()) {
            log::warn!("Could not open a browser: {}", e);
            terminal.say(&format!("Open this URL to continue: {}", url))?;
        }
        terminal.say("After login, copy the 'code' from the redirected URL")?;

        let answer = terminal.prompt("Paste the 'code' parameter from the URL: ")?;
        Ok(AuthorizationCode::parse(&answer)?)
    }

    /// Exchanges a single-use authorization code for a bearer token.
    pub async fn exchange_code(&self, code: &AuthorizationCode) -> Result<AccessToken, AppError> {
        let url = format!("{}/token", self.base_url);
        let form = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
        ];

        log::debug!("POST {}", url);
        let response = self.client.post(url).form(&form).send().await?;
        let result = extract_response_text(response).await?.error_for_status()?;

        let token: TokenResponse = serde_json::from_str(&result.data)?;
        log::info!("Obtained access token");
        Ok(AccessToken::new(token.access_token)?)
    }
}
