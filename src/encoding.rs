//! Transcript byte decoding.
//!
//! Transcripts are normally UTF-8, but files that passed through Windows tools
//! may carry a UTF-16 byte order mark. The BOM decides the encoding; without one
//! the bytes are read as UTF-8, replacing invalid sequences with U+FFFD instead
//! of failing.

use encoding_rs::{Encoding, UTF_8};

/// Detect the transcript encoding from its byte order mark.
///
/// Defaults to UTF-8 when no BOM is present.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    Encoding::for_bom(bytes).map_or(UTF_8, |(encoding, _bom_len)| encoding)
}

/// Decode transcript bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use rs_papermeta::encoding::decode_transcript;
///
/// let text = decode_transcript(b"\xEF\xBB\xBF[TITLE] Hello");
/// assert_eq!(text, "[TITLE] Hello");
/// ```
#[must_use]
pub fn decode_transcript(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    // `decode` strips the BOM and replaces malformed sequences.
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_16BE, UTF_16LE};

    fn utf16le_with_bom(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn default_to_utf8_without_bom() {
        assert_eq!(detect_encoding(b"[TITLE] Test"), UTF_8);
    }

    #[test]
    fn detect_utf16_boms() {
        assert_eq!(detect_encoding(&[0xFF, 0xFE, b'a', 0]), UTF_16LE);
        assert_eq!(detect_encoding(&[0xFE, 0xFF, 0, b'a']), UTF_16BE);
    }

    #[test]
    fn decode_utf8_passthrough() {
        assert_eq!(decode_transcript("[TITLE] Café".as_bytes()), "[TITLE] Café");
    }

    #[test]
    fn decode_utf16le_transcript() {
        let bytes = utf16le_with_bom("[TITLE] Deep Learning\n[PLAIN_TEXT] Jane Doe");
        assert_eq!(decode_transcript(&bytes), "[TITLE] Deep Learning\n[PLAIN_TEXT] Jane Doe");
    }

    #[test]
    fn handle_invalid_utf8_gracefully() {
        let decoded = decode_transcript(b"[TITLE] Caf\xE9");
        assert!(decoded.starts_with("[TITLE] Caf"));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
