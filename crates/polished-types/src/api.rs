//! Wire types for the resume-review backend API.
//!
//! Field names here are the protocol: they match the backend's JSON
//! contract exactly (`session_id`, `initial_analysis`, `detail`, ...).
//! The client treats everything beyond these shapes as opaque.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Success response from `POST /api/upload`.
///
/// The client keys on `session_id` and `initial_analysis`; the backend
/// also returns a status message and a truncated echo of the extracted
/// resume text, carried here for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resume_text: String,
    pub initial_analysis: String,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Success response from `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Response from `GET /api/session/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub has_resume: bool,
    pub message_count: u32,
    /// Naive UTC timestamp; the backend serializes without a zone suffix.
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let req = ChatRequest {
            message: "Tighten my summary".to_string(),
            session_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"message\":\"Tighten my summary\""));
        assert!(json.contains("\"session_id\":\"abc-123\""));
    }

    #[test]
    fn test_upload_response_minimal_body() {
        // Older backend builds omit message/resume_text.
        let json = r#"{"session_id":"s1","initial_analysis":"Looks solid."}"#;
        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.session_id, "s1");
        assert_eq!(resp.initial_analysis, "Looks solid.");
        assert!(resp.message.is_empty());
        assert!(resp.resume_text.is_empty());
    }

    #[test]
    fn test_chat_response_without_suggestions() {
        let json = r#"{"response":"Sure, here is a rewrite."}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "Sure, here is a rewrite.");
        assert!(resp.suggestions.is_none());
        assert!(resp.session_id.is_empty());
    }

    #[test]
    fn test_chat_response_with_suggestions() {
        let json = r#"{"response":"Done","session_id":"s1","suggestions":["Add metrics"]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.suggestions.unwrap(), vec!["Add metrics".to_string()]);
    }

    #[test]
    fn test_error_body_parse() {
        let json = r#"{"detail":"Unsupported file format: .exe"}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.detail, "Unsupported file format: .exe");
    }

    #[test]
    fn test_session_info_parse() {
        let json = r#"{"session_id":"s1","has_resume":true,"message_count":5,"created_at":"2025-06-01T12:00:00"}"#;
        let info: SessionInfo = serde_json::from_str(json).unwrap();
        assert!(info.has_resume);
        assert_eq!(info.message_count, 5);
        assert_eq!(info.created_at.format("%Y-%m-%d").to_string(), "2025-06-01");
    }
}
