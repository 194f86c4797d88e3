//! WordPress.com OAuth — the manual browser handshake and the code-for-token
//! exchange.

mod oauth;

pub use oauth::{OAuthClient, OAuthCredentials};
