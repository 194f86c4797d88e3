// src/config.rs
use crate::constants::{DEFAULT_MODEL, DEFAULT_OUTPUT_DIR, DEFAULT_REDIRECT_URI};
use crate::error::AppError;
use crate::types::{ApiKey, ClientId, ClientSecret, ModelName, ValidatedUrl};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Article titles to generate and publish
    pub titles: Vec<String>,

    /// File with one title per line (blank lines and '#' comments are skipped)
    #[arg(short = 'f', long)]
    pub titles_file: Option<String>,

    /// Directory that receives one file per article
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Generation model identifier
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Redirect URI registered with the OAuth application
    #[arg(long, default_value = DEFAULT_REDIRECT_URI)]
    pub redirect_uri: String,

    /// Environment file to load before reading configuration (defaults to ./.env)
    #[arg(long)]
    pub env_file: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved run configuration — validated and ready to drive every stage.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub redirect_uri: ValidatedUrl,
    pub api_key: ApiKey,
    pub model: ModelName,
    pub output_dir: PathBuf,
    pub titles: Vec<String>,
    pub verbose: bool,
}

impl PublishConfig {
    /// Resolves a complete configuration from CLI input, the optional
    /// environment file, and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        load_env_file(cli.env_file.as_deref())?;
        Self::from_sources(cli, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration with an explicit variable lookup.
    pub fn from_sources<F>(cli: CommandLineInput, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    AppError::MissingConfiguration(format!(
                        "{} environment variable not set",
                        name
                    ))
                })
        };

        let client_id = ClientId::new(required("CLIENT_ID")?)?;
        let client_secret = ClientSecret::new(required("CLIENT_SECRET")?)?;
        let api_key = required("GEMINI_API_KEY")
            .or_else(|_| required("GOOGLE_API_KEY"))
            .map_err(|_| {
                AppError::MissingConfiguration(
                    "GEMINI_API_KEY (or GOOGLE_API_KEY) environment variable not set".to_string(),
                )
            })?;
        let api_key = ApiKey::new(api_key)?;

        let mut titles: Vec<String> = cli
            .titles
            .into_iter()
            .filter(|title| !title.trim().is_empty())
            .collect();
        if let Some(path) = &cli.titles_file {
            titles.extend(read_titles_file(Path::new(path))?);
        }

        Ok(PublishConfig {
            client_id,
            client_secret,
            redirect_uri: ValidatedUrl::parse(&cli.redirect_uri)?,
            api_key,
            model: ModelName::new(cli.model)?,
            output_dir: PathBuf::from(cli.output_dir),
            titles,
            verbose: cli.verbose,
        })
    }
}

/// Loads variables from an env file without overriding ones already set.
/// A missing default `.env` is not an error; a missing explicit file is.
fn load_env_file(path: Option<&str>) -> Result<(), AppError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                AppError::MissingConfiguration(format!("Could not load env file {}: {}", path, e))
            })?;
            log::debug!("Loaded environment from {}", path);
        }
        None => match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => log::debug!("No .env file found"),
            Err(e) => {
                return Err(AppError::MissingConfiguration(format!(
                    "Could not load .env: {}",
                    e
                )))
            }
        },
    }
    Ok(())
}

/// Parses a titles file: one title per line, skipping blanks and comments.
fn read_titles_file(path: &Path) -> Result<Vec<String>, AppError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_titles(&content))
}

fn parse_titles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
