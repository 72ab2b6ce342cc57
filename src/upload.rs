//! Upload guard for lab-report files.
//!
//! Runs before any store interaction; a rejected file never reaches
//! the report bank. The declared MIME type is trusted as a browser
//! file input would report it, and a path-based helper derives type
//! and size for callers holding only a path.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME types the report upload accepts. "image/jpg" is not a
/// registered type but browsers report it for some JPEG files, so it
/// stays whitelisted.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "image/jpeg",
    "image/png",
    "image/jpg",
    "application/pdf",
];

/// Upload size cap.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024; // 10MB

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0} (expected a JPG, PNG or PDF)")]
    UnsupportedType(String),

    #[error("File too large: {size_mb:.1}MB exceeds {max_mb}MB limit")]
    FileTooLarge { size_mb: f64, max_mb: u64 },
}

/// A file offered for upload, before any validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Check a candidate against the accepted types and the size cap.
///
/// Type is checked before size, so an oversized file of the wrong
/// type reports the type problem.
pub fn validate_candidate(candidate: &UploadCandidate) -> Result<(), UploadError> {
    if !ACCEPTED_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        tracing::warn!(
            mime_type = %candidate.mime_type,
            "Rejected upload: unsupported type"
        );
        return Err(UploadError::UnsupportedType(candidate.mime_type.clone()));
    }

    if candidate.size_bytes > MAX_UPLOAD_BYTES {
        tracing::warn!(
            size_bytes = candidate.size_bytes,
            "Rejected upload: file too large"
        );
        return Err(UploadError::FileTooLarge {
            size_mb: candidate.size_mb(),
            max_mb: MAX_UPLOAD_BYTES / 1024 / 1024,
        });
    }

    Ok(())
}

/// Build a candidate from a file on disk: MIME from the extension,
/// size from filesystem metadata.
pub fn candidate_from_path(path: &Path) -> Result<UploadCandidate, UploadError> {
    let metadata = std::fs::metadata(path)?;
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    Ok(UploadCandidate {
        file_name,
        mime_type,
        size_bytes: metadata.len(),
    })
}
