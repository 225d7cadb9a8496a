//! Errors surfaced by parsing, decoding and cleaning.
//!
//! Rule-file and CLI plumbing use `anyhow`; these are the two failure kinds a
//! caller of the engine can observe for a single input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    /// The input cannot be segmented into URI components.
    #[error("malformed URI: {0}")]
    MalformedUri(String),
    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("URI contains invalid characters: '{0}'")]
    InvalidEncoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = UriError::MalformedUri("http://a:b".to_string());
        assert_eq!(err.to_string(), "malformed URI: http://a:b");
        let err = UriError::InvalidEncoding("http://x/%FF".to_string());
        assert_eq!(
            err.to_string(),
            "URI contains invalid characters: 'http://x/%FF'"
        );
    }
}
