// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of a
//! run: where it authenticates, where it generates, where it publishes,
//! and where it leaves its local copies.

// ---------------------------------------------------------------------------
// WordPress.com OAuth
// ---------------------------------------------------------------------------

/// Base URL of the WordPress.com OAuth2 endpoints (`/authorize`, `/token`).
pub const WPCOM_OAUTH_BASE_URL: &str = "https://public-api.wordpress.com/oauth2";

/// Redirect URI registered with the OAuth application.
///
/// Must match the application's registered value exactly, including the
/// trailing slash, or the authorize step is rejected.
pub const DEFAULT_REDIRECT_URI: &str = "https://localhost/";

/// Scope requested during authorization. `global` grants access to every
/// site the user owns.
pub const OAUTH_SCOPE: &str = "global";

// ---------------------------------------------------------------------------
// WordPress.com REST
// ---------------------------------------------------------------------------

/// Base URL of the WordPress.com REST API used for site listing and posting.
pub const WPCOM_REST_BASE_URL: &str = "https://public-api.wordpress.com/rest/v1.1";

/// Post status sent on creation. Articles go live immediately.
pub const POST_STATUS_PUBLISH: &str = "publish";

// ---------------------------------------------------------------------------
// Generation backend
// ---------------------------------------------------------------------------

/// Base URL of the Gemini REST API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is given on the command line.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// ---------------------------------------------------------------------------
// Local output
// ---------------------------------------------------------------------------

/// Directory that receives one file per generated article.
pub const DEFAULT_OUTPUT_DIR: &str = "articles";

/// Character substituted for anything a filesystem would reject.
pub const FILENAME_REPLACEMENT: char = '_';

/// Longest file name most filesystems accept.
pub const FILENAME_MAX_LENGTH: usize = 255;

/// Name used when a title sanitizes to nothing.
pub const UNTITLED_FILENAME: &str = "untitled";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies in logs.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
