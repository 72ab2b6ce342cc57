//! Account settings: password change checks and the doctor
//! verification upload.
//!
//! Profile edits themselves go through `IdentityStore::update_profile`;
//! this module holds the validations the settings screen runs before
//! touching the store. Nothing here persists a password, the flow is a
//! front-end mock end to end.

use thiserror::Error;

use crate::upload::{UploadCandidate, UploadError, MAX_UPLOAD_BYTES};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// MIME types accepted for a verification document. Stricter than the
/// report upload list: no "image/jpg" alias here.
pub const VERIFICATION_MIME_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Please upload a PDF, JPG, or PNG file")]
    UnsupportedDocument(String),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Validate a password change the way the settings form does: mismatch
/// is reported before length.
pub fn validate_password_change(
    new_password: &str,
    confirm_password: &str,
) -> Result<(), AccountError> {
    if new_password != confirm_password {
        return Err(AccountError::PasswordMismatch);
    }
    if new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::PasswordTooShort);
    }
    Ok(())
}

/// Check a verification document against the accepted types and the
/// report upload size cap. Type is checked before size.
pub fn validate_verification_document(candidate: &UploadCandidate) -> Result<(), AccountError> {
    if !VERIFICATION_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        tracing::warn!(
            mime_type = %candidate.mime_type,
            "Rejected verification document: unsupported type"
        );
        return Err(AccountError::UnsupportedDocument(
            candidate.mime_type.clone(),
        ));
    }

    if candidate.size_bytes > MAX_UPLOAD_BYTES {
        tracing::warn!(
            size_bytes = candidate.size_bytes,
            "Rejected verification document: file too large"
        );
        return Err(UploadError::FileTooLarge {
            size_mb: candidate.size_mb(),
            max_mb: MAX_UPLOAD_BYTES / 1024 / 1024,
        }
        .into());
    }

    Ok(())
}
