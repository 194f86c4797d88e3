use super::ValidationError;
use std::fmt;
use url::Url;

/// Writes a secret as its first few characters followed by an ellipsis.
fn redact(secret: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let visible: String = secret.chars().take(4).collect();
    write!(f, "{}...", visible)
}

/// Rejects empty or whitespace-bearing credential strings.
fn validate_credential(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidCredential {
            reason: format!("{} must not contain whitespace", field),
        });
    }
    Ok(())
}

/// OAuth application client identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_credential(&value, "client id")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// OAuth application client secret. Never displayed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_credential(&value, "client secret")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(")?;
        redact(&self.0, f)?;
        f.write_str(")")
    }
}

/// API key for the generation backend.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        validate_credential(&key, "API key")?;
        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(")?;
        redact(&self.0, f)?;
        f.write_str(")")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        redact(&self.0, f)
    }
}

/// Single-use code pasted back by the user after authorizing in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    /// Accepts either the bare code or the whole redirected URL.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::EmptyField("authorization code"));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input).map_err(|e| ValidationError::InvalidUrl {
                url: input.to_string(),
                reason: e.to_string(),
            })?;
            return url
                .query_pairs()
                .find(|(key, _)| key == "code")
                .map(|(_, value)| Self(value.into_owned()))
                .filter(|code| !code.0.is_empty())
                .ok_or(ValidationError::EmptyField("authorization code"));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bearer credential shared read-only by every pipeline instance of a run.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_credential(&value, "access token")?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(")?;
        redact(&self.0, f)?;
        f.write_str(")")
    }
}

/// An http(s) URL, kept exactly as given.
///
/// OAuth redirect URIs must match the registered value byte for byte, so
/// the normalized `Url` form is only used for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(url.to_string()))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// The URL as originally given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation model identifier, e.g. `gemini-2.5-flash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::InvalidModelName {
                name,
                reason: "Model name cannot be empty".to_string(),
            });
        }

        // The name becomes a path segment of the request URL
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(ValidationError::InvalidModelName {
                name: name.clone(),
                reason: "Model name can only contain ASCII letters, digits, hyphens, underscores, and dots".to_string(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform HTML for one article, ready to be saved and published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPost(String);

impl RenderedPost {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_code_is_extracted_from_redirect_url() {
        let code = AuthorizationCode::parse("https://localhost/?code=abc123&state=x").unwrap();
        assert_eq!(code.as_str(), "abc123");
    }

    #[test]
    fn bare_authorization_code_is_trimmed() {
        let code = AuthorizationCode::parse("  abc123\n").unwrap();
        assert_eq!(code.as_str(), "abc123");
    }

    #[test]
    fn redirect_url_without_code_is_rejected() {
        assert!(AuthorizationCode::parse("https://localhost/?error=access_denied").is_err());
        assert!(AuthorizationCode::parse("   ").is_err());
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let token = AccessToken::new("supersecrettoken").unwrap();
        let secret = ClientSecret::new("anothersecret").unwrap();
        assert_eq!(format!("{:?}", token), "AccessToken(supe...)");
        assert!(!format!("{:?}", secret).contains("anothersecret"));
    }

    #[test]
    fn model_name_rejects_path_characters() {
        assert!(ModelName::new("gemini-2.5-flash").is_ok());
        assert!(ModelName::new("../models").is_err());
        assert!(ModelName::new("").is_err());
    }

    #[test]
    fn validated_url_requires_http_scheme() {
        assert!(ValidatedUrl::parse("https://localhost/").is_ok());
        assert!(ValidatedUrl::parse("ftp://localhost/").is_err());
    }

    #[test]
    fn validated_url_is_not_normalized() {
        for raw in ["https://localhost", "https://Example.COM:443/cb", "http://localhost:80"] {
            assert_eq!(ValidatedUrl::parse(raw).unwrap().as_str(), raw);
        }
    }
}
