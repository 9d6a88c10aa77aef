//! Append-only conversation transcript.
//!
//! A transcript is seeded with exactly one assistant message (the initial
//! analysis from the upload response) and only ever grows. Suggested
//! prompts are offered while the transcript still holds that single seed
//! entry, i.e. before the user has said anything.

use polished_types::chat::{ChatMessage, MessageRole};

/// Fixed prompts offered before the first user turn.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "How can I improve my bullet points?",
    "Is my resume ATS-friendly?",
    "What skills should I highlight for FAANG?",
    "Can you rewrite my experience section?",
];

/// Ordered, append-only list of chat turns.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Seed a transcript with the initial analysis as the sole assistant
    /// message. A transcript never exists without a session, so it always
    /// has at least one entry.
    pub fn new(initial_analysis: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(initial_analysis)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Whether the suggested prompts should still be offered.
    ///
    /// True only while the transcript holds exactly the seed analysis.
    pub fn suggestions_visible(&self) -> bool {
        self.messages.len() == 1
    }

    /// Count of user turns in the transcript.
    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_single_assistant_message() {
        let t = Transcript::new("Your resume is strong.");
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].role, MessageRole::Assistant);
        assert_eq!(t.messages()[0].content, "Your resume is strong.");
    }

    #[test]
    fn test_suggestions_only_before_first_user_turn() {
        let mut t = Transcript::new("analysis");
        assert!(t.suggestions_visible());

        t.push_user("How do I improve?");
        assert!(!t.suggestions_visible());

        t.push_assistant("Here's how.");
        assert!(!t.suggestions_visible());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut t = Transcript::new("analysis");
        t.push_user("first");
        t.push_assistant("second");
        t.push_user("third");

        let roles: Vec<_> = t.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
            ]
        );
        assert_eq!(t.user_turns(), 2);
    }

    #[test]
    fn test_suggested_prompts_are_the_fixed_set() {
        assert_eq!(SUGGESTED_PROMPTS.len(), 4);
        assert_eq!(SUGGESTED_PROMPTS[0], "How can I improve my bullet points?");
    }
}
