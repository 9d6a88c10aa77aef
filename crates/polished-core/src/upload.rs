//! Client-side file validation for the upload flow.
//!
//! Validation is extension-based and happens before any network call.
//! A rejected file never produces a request; the user gets the fixed
//! validation message and the panel stays upload-ready.

use std::path::Path;

use polished_types::error::UploadError;

/// File extensions the backend can extract text from (case-insensitive).
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "docx", "doc", "txt"];

/// Validate a resume file path before upload.
///
/// Checks the extension against [`ALLOWED_EXTENSIONS`]. Does not open the
/// file and never touches the network.
pub fn validate_resume_file(path: &Path) -> Result<(), UploadError> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Err(UploadError::UnsupportedType);
    };
    let ext = ext.to_ascii_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType)
    }
}

/// MIME type to attach to the multipart upload, by extension.
///
/// The backend keys on the filename, so this is advisory; unknown
/// extensions never reach here because validation runs first.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
