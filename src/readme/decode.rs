// src/readme/decode.rs
// =============================================================================
// This module decodes README content fetched from the GitHub API.
//
// The API returns README text as a base64 blob, wrapped to 60-character
// lines with embedded newlines. We strip the whitespace, decode the rest,
// and normalize the bytes to UTF-8 text.
//
// A malformed blob is treated as "no README text available" - we return an
// empty string instead of an error, so a single odd repository can never
// break the rest of the pipeline.
//
// Rust concepts:
// - Iterator adapters: filter out whitespace before decoding
// - String::from_utf8_lossy: UTF-8 conversion that never fails
// =============================================================================

use base64::{engine::general_purpose::STANDARD, Engine as _};

// Decodes a base64-encoded README blob into UTF-8 text
//
// Parameters:
//   blob: base64 text as returned by the GitHub readme endpoint
//
// Returns: the decoded text, or "" if the blob is not valid base64
pub fn decode_base64_text(blob: &str) -> String {
    // The API inserts newlines into the blob; base64 decoders reject them
    let compact: String = blob.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    match STANDARD.decode(compact.as_bytes()) {
        // from_utf8_lossy replaces invalid byte sequences with U+FFFD
        // instead of failing, which is fine for display text
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("Warning: could not decode README content: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_blob() {
        // "# Hello\n\nWorld" encoded without line wrapping
        let blob = STANDARD.encode("# Hello\n\nWorld");
        assert_eq!(decode_base64_text(&blob), "# Hello\n\nWorld");
    }

    #[test]
    fn test_decode_wrapped_blob() {
        // GitHub wraps blobs with newlines; the decoder must tolerate them
        let blob = "IyBI\nZWxs\nbw==\n";
        assert_eq!(decode_base64_text(blob), "# Hello");
    }

    #[test]
    fn test_decode_malformed_blob_is_empty() {
        assert_eq!(decode_base64_text("this is !!! not base64"), "");
    }

    #[test]
    fn test_decode_non_utf8_bytes_are_replaced() {
        // 0xFF is not valid UTF-8; decoding must still produce a string
        let blob = STANDARD.encode([0x68, 0x69, 0xFF]);
        let text = decode_base64_text(&blob);
        assert!(text.starts_with("hi"));
    }
}
