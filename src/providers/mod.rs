use crate::normalizer::SchemaErrors;
use thiserror::Error;

/// Provider error types
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP error {status}: {body}")]
    HttpError { status: u16, body: String },
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    Schema(#[from] SchemaErrors),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

pub mod pokemontcg;
pub mod provider_base;

pub use pokemontcg::{CardQuery, PokemonTcgProvider};
pub use provider_base::{AbstractProvider, BaseProvider};
