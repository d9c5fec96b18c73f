//! Headerless deflate, as expected by `PlantUML` servers.
//!
//! The stream carries no zlib or gzip wrapper and no checksum trailer.

use std::io::{self, Read, Write};

use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

/// Compress `data` into a raw deflate stream at maximum compression.
///
/// The sink is a `Vec`, whose `Write` impl never errors.
pub fn deflate_raw(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(
        Vec::with_capacity(data.len() / 2 + 16),
        Compression::best(),
    );
    encoder
        .write_all(data)
        .and_then(|()| encoder.finish())
        .expect("deflate into an in-memory buffer is infallible")
}

/// Decompress a raw deflate stream.
///
/// Bytes after the final deflate block are ignored, so the zero padding
/// left by alphabet unpacking does not need to be stripped first.
pub fn inflate_raw(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::with_capacity(data.len() * 4);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deflate_has_no_zlib_header() {
        let compressed = deflate_raw(b"@startuml\nA -> B\n@enduml");

        // A zlib stream starts with CMF 0x78; gzip with 0x1f 0x8b.
        assert_ne!(compressed[0], 0x78);
        assert_ne!(&compressed[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_inflate_restores_input() {
        let text = "@startuml\nAlice -> Bob: hello\nBob --> Alice: hi\n@enduml\n";
        let compressed = deflate_raw(text.as_bytes());

        assert_eq!(inflate_raw(&compressed).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_inflate_ignores_trailing_padding() {
        let mut compressed = deflate_raw(b"Alice -> Bob");
        compressed.extend_from_slice(&[0, 0]);

        assert_eq!(inflate_raw(&compressed).unwrap(), b"Alice -> Bob");
    }

    #[test]
    fn test_deflate_is_deterministic() {
        let text = "@startuml\nclass Foo\nclass Bar\nFoo --> Bar\n@enduml";
        assert_eq!(deflate_raw(text.as_bytes()), deflate_raw(text.as_bytes()));
    }

    #[test]
    fn test_deflate_compresses_repetitive_input() {
        let text = "A -> B\n".repeat(200);
        assert!(deflate_raw(text.as_bytes()).len() < text.len() / 10);
    }

    #[test]
    fn test_inflate_rejects_garbage() {
        // Block type 0b11 is reserved.
        assert!(inflate_raw(&[0xFF, 0xFF, 0xFF, 0xFF]).is_err());
    }
}
