//! Base64 data-URI decoding for inline image attachments.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

use verifact_core::ImageAttachment;

/// Decode a `data:<mime>;base64,<payload>` URI into raw bytes + MIME type.
///
/// Malformed URIs are rejected here, before any network call is attempted.
pub fn parse_data_uri(uri: &str) -> Result<ImageAttachment> {
    let rest = uri.strip_prefix("data:").context("not a data URI")?;
    let (header, payload) = rest
        .split_once(',')
        .context("data URI has no payload separator")?;
    let mime_type = header
        .strip_suffix(";base64")
        .context("data URI is not base64-encoded")?;
    if mime_type.is_empty() {
        bail!("data URI has no MIME type");
    }
    let data = STANDARD
        .decode(payload)
        .context("invalid base64 payload in data URI")?;
    Ok(ImageAttachment {
        data,
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_png_data_uri() {
        // "hello" in base64
        let attachment = parse_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.data, b"hello");
    }

    #[test]
    fn rejects_non_data_schemes() {
        assert!(parse_data_uri("https://example.com/a.png").is_err());
    }

    #[test]
    fn rejects_missing_payload() {
        assert!(parse_data_uri("data:image/png;base64").is_err());
    }

    #[test]
    fn rejects_non_base64_encoding() {
        assert!(parse_data_uri("data:image/png,rawbytes").is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(parse_data_uri("data:image/png;base64,@@@@").is_err());
    }

    #[test]
    fn rejects_empty_mime_type() {
        assert!(parse_data_uri("data:;base64,aGVsbG8=").is_err());
    }
}
