//! `PlantUML` text encoding.
//!
//! Turns diagram source into the compact token `PlantUML` servers accept in
//! their request path, and back:
//!
//! ```text
//! text --UTF-8--> bytes --raw deflate--> compressed --6-bit alphabet--> token
//! ```
//!
//! # Modules
//!
//! - [`alphabet`]: 3-bytes-to-4-symbols packing with the `PlantUML` alphabet
//! - [`deflate`]: headerless deflate and inflate
//! - [`delimiters`]: `@startuml` / `@enduml` normalization
//!
//! # Example
//!
//! ```
//! use puml_encoding::{decode, encode, ensure_delimiters};
//!
//! let source = ensure_delimiters("Alice -> Bob");
//! let token = encode(&source);
//! assert_eq!(decode(&token).unwrap(), "@startuml\nAlice -> Bob\n@enduml\n");
//! ```

pub mod alphabet;
pub mod deflate;
pub mod delimiters;

use std::string::FromUtf8Error;

pub use alphabet::{ALPHABET, decode_bytes, encode_bytes};
pub use deflate::{deflate_raw, inflate_raw};
pub use delimiters::{END_DELIMITER, START_DELIMITER, ensure_delimiters, has_start_delimiter};

/// Token decoding error.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Character outside the `PlantUML` alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Character index within the token.
        position: usize,
    },
    /// Unpacked bytes are not a valid deflate stream.
    #[error("invalid deflate stream: {0}")]
    Inflate(#[from] std::io::Error),
    /// Inflated bytes are not UTF-8.
    #[error("decoded text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Encode diagram text into a `PlantUML` URL token.
///
/// Total: every input, including the empty string, produces a token. The
/// result is deterministic for a given input.
pub fn encode(text: &str) -> String {
    let compressed = deflate_raw(text.as_bytes());
    tracing::debug!(
        text_len = text.len(),
        compressed_len = compressed.len(),
        "compressed diagram source"
    );
    encode_bytes(&compressed)
}

/// Decode a `PlantUML` URL token back into diagram text.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let compressed = decode_bytes(token)?;
    let bytes = inflate_raw(&compressed)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_simple_diagram() {
        let text = "@startuml\nA->B\n@enduml";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn test_round_trip_unicode() {
        let text = "@startuml\nÉlodie -> 東京: こんにちは 👋\n@enduml\n";
        assert_eq!(decode(&encode(text)).unwrap(), text);
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(decode(&encode("")).unwrap(), "");
    }

    #[test]
    fn test_round_trip_large_diagram() {
        let mut text = String::from("@startuml\n");
        for i in 0..500 {
            text.push_str(&format!("Service{i} -> Service{}: call {i}\n", i + 1));
        }
        text.push_str("@enduml\n");

        assert_eq!(decode(&encode(&text)).unwrap(), text);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let text = "@startuml\nclass Order\nclass Customer\nCustomer \"1\" -- \"*\" Order\n@enduml";
        assert_eq!(encode(text), encode(text));
    }

    #[test]
    fn test_encode_token_shape() {
        let token = encode("@startuml\nA->B\n@enduml");

        assert!(!token.is_empty());
        assert_eq!(token.len() % 4, 0);
        assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encode_token_length_matches_compressed_length() {
        let text = "@startuml\nBob -> Alice : hello\n@enduml";
        let compressed = deflate_raw(text.as_bytes());

        assert_eq!(encode(text).len(), compressed.len().div_ceil(3) * 4);
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode("Syf+Kj2r").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidCharacter { character: '+', .. }));
    }

    #[test]
    fn test_decode_corrupt_stream() {
        let err = decode("____").unwrap_err();
        assert!(matches!(err, DecodeError::Inflate(_)), "got {err:?}");
    }
}
