use std::path::{Path, PathBuf};

use base64::prelude::*;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while decoding an embedded media payload
#[derive(Debug, Error)]
pub enum MediaDecodeError {
    #[error("missing ',' separator in embedded media payload")]
    MissingSeparator,

    #[error("invalid media header: {0}")]
    InvalidHeader(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to write media file: {0}")]
    Io(#[from] std::io::Error),
}

/// Kind of media attached to a report, each stored under its own subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
}

impl MediaCategory {
    pub fn subdir(&self) -> &'static str {
        match self {
            MediaCategory::Image => "images",
            MediaCategory::Video => "videos",
            MediaCategory::Audio => "audios",
        }
    }
}

/// Filesystem store for decoded media payloads.
///
/// Clients embed media as `data:<mime-type>;base64,<payload>` strings; this
/// store decodes them to bytes on disk and hands back the path. Every call
/// produces a new file, even for identical input.
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload root and all category subdirectories
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        for category in [MediaCategory::Image, MediaCategory::Video, MediaCategory::Audio] {
            tokio::fs::create_dir_all(self.root.join(category.subdir())).await?;
        }
        Ok(())
    }

    /// Decode a data-URI payload and write it under the category subdirectory.
    ///
    /// Returns the path of the freshly written file. Any malformed input is a
    /// hard failure; a file already written is never removed here.
    pub async fn decode_and_store(
        &self,
        data_uri: &str,
        category: MediaCategory,
    ) -> Result<PathBuf, MediaDecodeError> {
        let (header, body) = data_uri
            .split_once(',')
            .ok_or(MediaDecodeError::MissingSeparator)?;

        let mime_type = header
            .split_once(':')
            .map(|(_, rest)| rest.split(';').next().unwrap_or(""))
            .ok_or_else(|| MediaDecodeError::InvalidHeader(header.to_string()))?;

        let extension = extension_for_mime(mime_type);
        let bytes = BASE64_STANDARD.decode(body)?;

        let dir = self.root.join(category.subdir());
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}{}", Uuid::new_v4(), extension);
        let path = dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;

        Ok(path)
    }
}

/// File extension for a MIME type, falling back to a generic binary extension
fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "video/mp4" => ".mp4",
        "video/webm" => ".webm",
        "audio/mpeg" => ".mp3",
        "audio/ogg" => ".ogg",
        "audio/wav" => ".wav",
        "application/pdf" => ".pdf",
        _ => ".bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, MediaStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());
        (dir, store)
    }

    fn png_payload(bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", BASE64_STANDARD.encode(bytes))
    }

    #[tokio::test]
    async fn test_decode_and_store_writes_original_bytes() {
        let (_dir, store) = store();
        let bytes = b"not really a png";

        let path = store
            .decode_and_store(&png_payload(bytes), MediaCategory::Image)
            .await
            .unwrap();

        assert!(path.starts_with(store.root().join("images")));
        assert_eq!(path.extension().unwrap(), "png");
        assert_eq!(tokio::fs::read(&path).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_each_call_produces_a_new_file() {
        let (_dir, store) = store();
        let payload = png_payload(b"same bytes");

        let first = store
            .decode_and_store(&payload, MediaCategory::Image)
            .await
            .unwrap();
        let second = store
            .decode_and_store(&payload, MediaCategory::Image)
            .await
            .unwrap();

        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());
    }

    #[tokio::test]
    async fn test_missing_separator_is_rejected() {
        let (_dir, store) = store();
        let err = store
            .decode_and_store("data:image/png;base64", MediaCategory::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, MediaDecodeError::MissingSeparator));
    }

    #[tokio::test]
    async fn test_header_without_mime_type_is_rejected() {
        let (_dir, store) = store();
        let err = store
            .decode_and_store("image png,aGVsbG8=", MediaCategory::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, MediaDecodeError::InvalidHeader(_)));
    }

    #[tokio::test]
    async fn test_invalid_base64_is_rejected() {
        let (_dir, store) = store();
        let err = store
            .decode_and_store("data:image/png;base64,@@not-base64@@", MediaCategory::Image)
            .await
            .unwrap_err();
        assert!(matches!(err, MediaDecodeError::Base64(_)));
    }

    #[tokio::test]
    async fn test_unknown_mime_type_falls_back_to_bin() {
        let (_dir, store) = store();
        let path = store
            .decode_and_store("data:application/x-custom;base64,aGVsbG8=", MediaCategory::Video)
            .await
            .unwrap();
        assert_eq!(path.extension().unwrap(), "bin");
        assert!(path.starts_with(store.root().join("videos")));
    }

    #[test]
    fn test_extension_for_mime() {
        assert_eq!(extension_for_mime("image/jpeg"), ".jpg");
        assert_eq!(extension_for_mime("audio/mpeg"), ".mp3");
        assert_eq!(extension_for_mime("text/weird"), ".bin");
        assert_eq!(extension_for_mime(""), ".bin");
    }
}
