//! `ReviewApi` -- HTTP client for the resume-review backend.
//!
//! Two endpoints carry the whole product: `POST /api/upload` (multipart,
//! field `file`) and `POST /api/chat` (JSON). Session inspection and
//! deletion are also exposed for the CLI's info command and new-session
//! teardown. One request at a time per flow; the single-flight gating
//! lives in polished-core, not here.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use polished_core::upload::content_type_for;
use polished_types::api::{ApiErrorBody, ChatRequest, ChatResponse, SessionInfo, UploadResponse};
use polished_types::config::ClientConfig;
use polished_types::error::{ChatError, UploadError};

/// Client for the review backend.
pub struct ReviewApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewApi {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Override the base URL (useful for tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a resume file and receive the session with its initial
    /// analysis.
    ///
    /// The caller validates the extension first (polished-core); this
    /// method reads the file and issues exactly one multipart POST. Non-2xx
    /// responses surface the backend's `detail` when the body parses, and
    /// fall back to a transport-class error otherwise.
    pub async fn upload_resume(&self, path: &Path) -> Result<UploadResponse, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::File(e.to_string()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume.txt")
            .to_string();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(content_type_for(path))
            .map_err(|e| UploadError::File(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match parse_error_detail(&body) {
                Some(detail) => UploadError::Rejected { detail },
                None => UploadError::Transport(format!("HTTP {status}: {body}")),
            });
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Deserialization(format!("failed to parse response: {e}")))?;
        debug!(
            session_id = %upload.session_id,
            resume_text_len = upload.resume_text.len(),
            "resume uploaded"
        );
        Ok(upload)
    }

    /// Send one chat turn for a session.
    pub async fn chat(&self, session_id: &str, message: &str) -> Result<ChatResponse, ChatError> {
        let body = ChatRequest {
            message: message.to_string(),
            session_id: session_id.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = parse_error_detail(&body).unwrap_or(body);
            return Err(ChatError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::Deserialization(format!("failed to parse response: {e}")))
    }

    /// Fetch status for a session.
    pub async fn session_info(&self, session_id: &str) -> Result<SessionInfo, ChatError> {
        let response = self
            .client
            .get(self.url(&format!("/api/session/{session_id}")))
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = parse_error_detail(&body).unwrap_or(body);
            return Err(ChatError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::Deserialization(format!("failed to parse response: {e}")))
    }

    /// Delete a session server-side. Best-effort: callers ignore failures
    /// during teardown.
    pub async fn delete_session(&self, session_id: &str) -> Result<(), ChatError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/session/{session_id}")))
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Server {
                status: status.as_u16(),
                detail: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

/// Pull the `detail` field out of a backend error body, if it parses.
fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_api() -> ReviewApi {
        ReviewApi::new(&ClientConfig::default())
    }

    #[test]
    fn test_url_joining() {
        let api = make_api();
        assert_eq!(api.url("/api/upload"), "http://localhost:8000/api/upload");
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let api = make_api().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(api.url("/api/chat"), "http://127.0.0.1:9000/api/chat");
    }

    #[test]
    fn test_parse_error_detail() {
        assert_eq!(
            parse_error_detail(r#"{"detail":"Unsupported file format: .exe"}"#).as_deref(),
            Some("Unsupported file format: .exe")
        );
        assert!(parse_error_detail("<html>502 Bad Gateway</html>").is_none());
        assert!(parse_error_detail("").is_none());
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_a_file_error() {
        let api = make_api();
        let err = api
            .upload_resume(Path::new("/nonexistent/resume.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::File(_)));
        // File errors are surfaced with their reason, not the generic fallback.
        assert!(err.user_message().starts_with("Could not read that file"));
    }
}
