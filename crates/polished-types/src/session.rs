//! Client-side session handle.
//!
//! A session correlates one uploaded resume with its chat turns. It is
//! created from a successful upload response, lives only in client memory,
//! and is dropped wholesale when the user starts over.

use serde::{Deserialize, Serialize};

use crate::api::UploadResponse;

/// Handle for an active review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned identifier, opaque to the client.
    pub session_id: String,
    /// The assistant's first message, generated as part of the upload.
    pub initial_analysis: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>, initial_analysis: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            initial_analysis: initial_analysis.into(),
        }
    }

    /// Short prefix of the session id for display.
    ///
    /// The id is an opaque server-assigned string, so the cut falls back
    /// to the nearest char boundary rather than assuming ASCII.
    pub fn short_id(&self) -> &str {
        let mut end = 8.min(self.session_id.len());
        while !self.session_id.is_char_boundary(end) {
            end -= 1;
        }
        &self.session_id[..end]
    }
}

impl From<UploadResponse> for Session {
    fn from(resp: UploadResponse) -> Self {
        Self {
            session_id: resp.session_id,
            initial_analysis: resp.initial_analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_upload_response() {
        let resp = UploadResponse {
            session_id: "0b5fa363-11ab-4de7-a5c8-3c2c3e9d8f10".to_string(),
            message: "Resume uploaded and analyzed successfully".to_string(),
            resume_text: "JANE DOE...".to_string(),
            initial_analysis: "Strong resume overall.".to_string(),
        };
        let session = Session::from(resp);
        assert_eq!(session.session_id, "0b5fa363-11ab-4de7-a5c8-3c2c3e9d8f10");
        assert_eq!(session.initial_analysis, "Strong resume overall.");
    }

    #[test]
    fn test_short_id() {
        let session = Session::new("0b5fa363-11ab", "hi");
        assert_eq!(session.short_id(), "0b5fa363");

        let tiny = Session::new("ab", "hi");
        assert_eq!(tiny.short_id(), "ab");
    }

    #[test]
    fn test_short_id_respects_char_boundaries() {
        // Byte 8 lands inside the two-byte 'é'; the cut must back off to
        // the previous boundary instead of panicking.
        let session = Session::new("aaaaaaa\u{e9}-id", "hi");
        assert_eq!(session.short_id(), "aaaaaaa");

        let multibyte = Session::new("\u{4f1a}\u{8a71}\u{30bb}\u{30c3}\u{30b7}\u{30e7}\u{30f3}", "hi");
        // 8 bytes is inside the third 3-byte char; expect the first two.
        assert_eq!(multibyte.short_id(), "\u{4f1a}\u{8a71}");
    }
}
