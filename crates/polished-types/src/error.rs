//! Error types for upload and chat operations.
//!
//! The two flows carry deliberately different surfacing policies: upload
//! errors are shown to the user with server detail (they must fix the
//! file), chat errors are swallowed behind a fixed apology so the
//! conversation flow stays unbroken. `UploadError::user_message` encodes
//! the first policy; the chat fallback lives with the turn state in
//! polished-core.

use thiserror::Error;

/// Fixed message for a file rejected by client-side validation.
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Please upload a PDF, DOCX, or TXT file";

/// Generic fallback when an upload fails without a server-provided detail.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload resume";

/// Errors from the upload flow.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type")]
    UnsupportedType,

    #[error("could not read file: {0}")]
    File(String),

    #[error("upload rejected: {detail}")]
    Rejected { detail: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl UploadError {
    /// The message shown to the user for this error.
    ///
    /// Server-provided detail is surfaced verbatim; validation failures get
    /// the fixed client-side message; everything else collapses to the
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::UnsupportedType => UNSUPPORTED_TYPE_MESSAGE.to_string(),
            UploadError::File(reason) => format!("Could not read that file: {reason}"),
            UploadError::Rejected { detail } => detail.clone(),
            UploadError::Transport(_) | UploadError::Deserialization(_) => {
                UPLOAD_FAILED_MESSAGE.to_string()
            }
        }
    }
}

/// Errors from a chat round-trip.
///
/// Never shown to the user verbatim; the chat loop appends a fixed apology
/// and logs the detail instead.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server error (HTTP {status}): {detail}")]
    Server { status: u16, detail: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Read(String),

    #[error("invalid config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_user_message() {
        let err = UploadError::UnsupportedType;
        assert_eq!(err.user_message(), "Please upload a PDF, DOCX, or TXT file");
    }

    #[test]
    fn test_rejected_surfaces_server_detail() {
        let err = UploadError::Rejected {
            detail: "Could not extract text from PDF".to_string(),
        };
        assert_eq!(err.user_message(), "Could not extract text from PDF");
    }

    #[test]
    fn test_transport_collapses_to_generic() {
        let err = UploadError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);

        let err = UploadError::Deserialization("missing field".to_string());
        assert_eq!(err.user_message(), UPLOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::Server {
            status: 500,
            detail: "Failed to get response".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Failed to get response"));
    }
}
