//! Single-flight chat turn state.
//!
//! `ChatState` wraps the transcript with the loading flag that gates
//! sends: at most one request may be outstanding, and blank input is a
//! no-op. Transcript mutation for a turn happens only through this type,
//! which keeps the round-trip invariant (one user + one assistant entry
//! per completed turn) in one place.

use tracing::debug;

use crate::transcript::Transcript;

/// Fixed assistant reply appended when a chat request fails.
///
/// Chat errors are deliberately not surfaced with detail; the apology
/// keeps the conversational flow unbroken and the user just retries.
pub const FALLBACK_REPLY: &str = "I apologize, but I encountered an error. Please try again.";

/// Transcript plus the in-flight guard for the chat panel.
#[derive(Debug)]
pub struct ChatState {
    transcript: Transcript,
    in_flight: bool,
}

impl ChatState {
    /// Start a chat seeded with the initial analysis.
    pub fn new(initial_analysis: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(initial_analysis),
            in_flight: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether a request is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Try to start a turn with the given raw input.
    ///
    /// Returns the trimmed message to send, or `None` when the send is a
    /// no-op: blank/whitespace-only input, or a request already in flight.
    /// On success the user message is appended optimistically and the
    /// loading flag is set; the caller must finish the turn with
    /// [`complete_turn`](Self::complete_turn) or
    /// [`fail_turn`](Self::fail_turn).
    pub fn begin_turn(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }
        if self.in_flight {
            debug!("send ignored: request already in flight");
            return None;
        }
        self.transcript.push_user(message);
        self.in_flight = true;
        Some(message.to_string())
    }

    /// Finish a turn with the assistant's reply, appended verbatim.
    pub fn complete_turn(&mut self, reply: impl Into<String>) {
        self.transcript.push_assistant(reply);
        self.in_flight = false;
    }

    /// Finish a turn after a failed request.
    ///
    /// Appends the fixed apology instead of any error detail and clears
    /// the loading flag.
    pub fn fail_turn(&mut self) {
        self.transcript.push_assistant(FALLBACK_REPLY);
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polished_types::chat::MessageRole;

    #[test]
    fn test_blank_input_is_noop() {
        let mut chat = ChatState::new("analysis");
        assert!(chat.begin_turn("").is_none());
        assert!(chat.begin_turn("   \t\n").is_none());
        assert_eq!(chat.transcript().len(), 1);
        assert!(!chat.is_loading());
    }

    #[test]
    fn test_begin_turn_trims_and_appends_optimistically() {
        let mut chat = ChatState::new("analysis");
        let sent = chat.begin_turn("  Fix my summary  ").unwrap();
        assert_eq!(sent, "Fix my summary");
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(chat.transcript().last().unwrap().role, MessageRole::User);
        assert!(chat.is_loading());
    }

    #[test]
    fn test_send_while_in_flight_is_noop() {
        let mut chat = ChatState::new("analysis");
        chat.begin_turn("first").unwrap();
        assert!(chat.begin_turn("second").is_none());
        // Only the seed + the first user message.
        assert_eq!(chat.transcript().len(), 2);
    }

    #[test]
    fn test_completed_round_trip_adds_one_pair() {
        let mut chat = ChatState::new("analysis");
        chat.begin_turn("question").unwrap();
        chat.complete_turn("answer");

        assert_eq!(chat.transcript().len(), 3);
        assert!(!chat.is_loading());
        assert_eq!(chat.transcript().last().unwrap().content, "answer");

        // The panel is ready for the next turn.
        assert!(chat.begin_turn("next").is_some());
    }

    #[test]
    fn test_failed_turn_appends_fallback_and_clears_loading() {
        let mut chat = ChatState::new("analysis");
        chat.begin_turn("question").unwrap();
        chat.fail_turn();

        assert_eq!(chat.transcript().len(), 3);
        assert_eq!(chat.transcript().last().unwrap().content, FALLBACK_REPLY);
        assert_eq!(
            chat.transcript().last().unwrap().role,
            MessageRole::Assistant
        );
        assert!(!chat.is_loading());
    }

    #[test]
    fn test_reply_appended_verbatim() {
        let mut chat = ChatState::new("analysis");
        chat.begin_turn("rewrite it").unwrap();
        let reply = "## Summary\n\n- **Led** a team of 5\n<script>alert(1)</script>";
        chat.complete_turn(reply);
        assert_eq!(chat.transcript().last().unwrap().content, reply);
    }
}
