//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself cannot
//! fail; everything here comes from fetching, decoding or terminal I/O.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for commands and the API client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure, including timeouts
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a status code above 399
    #[error("bad status code: {0}")]
    BadStatus(u16),

    /// The payload did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("please provide a {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PokedexError::BadStatus(404).to_string(), "bad status code: 404");
        assert_eq!(
            PokedexError::MissingArgument("location area name").to_string(),
            "please provide a location area name"
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let err = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err: PokedexError = err.into();

        assert!(matches!(err, PokedexError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode response"));
    }
}
