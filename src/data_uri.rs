//! Data-URI construction for selected image files.
//!
//! A completed read yields a `data:<mime>;base64,<payload>` string, the
//! same shape a browser hands to an inline image preview. The MIME prefix
//! comes from the file extension, with content sniffing as a fallback for
//! unhelpful names.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{PreviewError, Result};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A `data:` URI holding one file's content, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri(String);

impl DataUri {
    /// Encode raw file content, deriving the MIME prefix from `path`.
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Self {
        let mime = mime_for_path(path)
            .or_else(|| sniff_mime(bytes))
            .unwrap_or(FALLBACK_MIME);
        DataUri(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The MIME type between the `data:` scheme and the base64 marker.
    pub fn mime(&self) -> &str {
        let rest = &self.0["data:".len()..];
        rest.split(';').next().unwrap_or(FALLBACK_MIME)
    }

    /// Decode the payload back into the original bytes.
    pub fn data(&self) -> Result<Vec<u8>> {
        let payload = self
            .0
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| PreviewError::Payload("missing base64 marker".into()))?;
        BASE64
            .decode(payload)
            .map_err(|err| PreviewError::Payload(err.to_string()))
    }
}

/// Read a file in full and encode it as a data URI.
///
/// Runs on the executor, never on the UI thread; the UI loop receives the
/// result as a message once the read completes.
pub async fn read(path: PathBuf) -> Result<DataUri> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| PreviewError::Read {
            path: path.clone(),
            message: err.to_string(),
        })?;
    Ok(DataUri::from_bytes(&path, &bytes))
}

/// Extension-based MIME lookup, case-insensitive.
fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        "ico" => Some("image/x-icon"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Content sniffing for files whose extension says nothing useful.
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_known_payload_encoding() {
        let uri = DataUri::from_bytes(Path::new("photo.png"), b"hello");
        assert_eq!(uri.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(uri.mime(), "image/png");
        assert_eq!(uri.data().unwrap(), b"hello");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let uri = DataUri::from_bytes(Path::new("PHOTO.JPG"), b"x");
        assert_eq!(uri.mime(), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension_sniffs_content() {
        // The PNG signature alone is enough for format detection
        let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let uri = DataUri::from_bytes(Path::new("upload.tmp"), &png_magic);
        assert_eq!(uri.mime(), "image/png");
    }

    #[test]
    fn test_unrecognized_content_falls_back_to_octet_stream() {
        let uri = DataUri::from_bytes(Path::new("upload.tmp"), b"plain text");
        assert_eq!(uri.mime(), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_an_error() {
        let result = read(PathBuf::from("/nonexistent/photo.png")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_encodes_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.gif");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"GIF89a")
            .unwrap();

        let uri = read(path).await.unwrap();
        assert_eq!(uri.as_str(), "data:image/gif;base64,R0lGODlh");
    }
}
