use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid credential format: {reason}")]
    InvalidCredential { reason: String },

    #[error("Invalid model name: {name} - {reason}")]
    InvalidModelName { name: String, reason: String },
}
