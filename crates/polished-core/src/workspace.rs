//! Top-level review workspace lifecycle.
//!
//! The workspace is the client's only state machine: `Idle` (no session,
//! show the upload surface) or `Active` (chat + preview side by side).
//! Session, transcript, and preview are created together on upload and
//! discarded together on reset -- never independently.

use polished_types::session::Session;

use crate::chat::ChatState;
use crate::preview::PreviewState;

/// An active review: the session handle plus the chat and preview state
/// that exist only alongside it.
#[derive(Debug)]
pub struct ActiveReview {
    pub session: Session,
    pub chat: ChatState,
    pub preview: PreviewState,
}

/// The client's top-level state.
#[derive(Debug, Default)]
pub enum Workspace {
    /// No session: the upload surface is shown.
    #[default]
    Idle,
    /// A resume has been uploaded and analyzed.
    Active(ActiveReview),
}

impl Workspace {
    pub fn new() -> Self {
        Workspace::Idle
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Workspace::Active(_))
    }

    /// Enter the active state from a successful upload.
    ///
    /// The chat is seeded with the session's initial analysis and the
    /// preview starts empty. Any previous review is discarded wholesale.
    pub fn start(&mut self, session: Session) -> &mut ActiveReview {
        let chat = ChatState::new(session.initial_analysis.clone());
        *self = Workspace::Active(ActiveReview {
            session,
            chat,
            preview: PreviewState::new(),
        });
        match self {
            Workspace::Active(review) => review,
            Workspace::Idle => unreachable!("just set to Active"),
        }
    }

    /// Drop the current review and return to the upload surface.
    ///
    /// Returns the session id of the review that was discarded, if any,
    /// so the caller can best-effort delete it server-side.
    pub fn reset(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Workspace::Active(review) => Some(review.session.session_id),
            Workspace::Idle => None,
        }
    }

    pub fn active(&self) -> Option<&ActiveReview> {
        match self {
            Workspace::Active(review) => Some(review),
            Workspace::Idle => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveReview> {
        match self {
            Workspace::Active(review) => Some(review),
            Workspace::Idle => None,
        }
    }
}
