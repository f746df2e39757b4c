//! MIME type detection for image files passed on the command line.

use std::path::Path;

/// Detect an image MIME type by file extension.
pub fn detect_image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "tiff" | "tif" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_image_mime(&PathBuf::from("photo.jpg")), "image/jpeg");
    }

    #[test]
    fn detects_uppercase_extension() {
        assert_eq!(detect_image_mime(&PathBuf::from("shot.PNG")), "image/png");
    }

    #[test]
    fn unknown_extension_fallback() {
        let mime = detect_image_mime(&PathBuf::from("file.xyz"));
        assert_eq!(mime, "application/octet-stream");
        assert!(!is_image(mime));
    }
}
