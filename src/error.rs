// Error kinds shared by the library modules. The binary wraps these in
// `anyhow` for context; the library itself stays on a concrete type so
// callers (and tests) can match on the kind.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoaError {
    /// Malformed user input: bad email, invalid address-line combination.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The address service rejected the address for that country's schema.
    #[error("Address validation error: {0}")]
    AddressValidation(String),

    /// The address service could not be reached or answered with garbage.
    #[error("Address service error: {0}")]
    AddressService(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Reading an answer from the terminal failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CoaError {
    fn from(e: reqwest::Error) -> Self {
        CoaError::AddressService(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoaError>;
