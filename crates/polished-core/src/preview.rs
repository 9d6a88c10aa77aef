//! Resume preview pane state and rewrite detection.
//!
//! The preview reflects the latest rewritten-resume string pushed from the
//! chat flow. Content is replaced wholesale, never merged. An update goes
//! through a brief staged/"updating" phase before settling; the UI sleeps
//! [`SETTLE_DELAY_MS`] between the two as a visual affordance only.

/// How long the pane shows its "updating" state before settling.
pub const SETTLE_DELAY_MS: u64 = 300;

/// Minimum line count for an untagged fenced block to count as a rewrite.
const MIN_UNTAGGED_REWRITE_LINES: usize = 8;

/// Fence tags that always mark resume content.
const REWRITE_TAGS: [&str; 4] = ["resume", "markdown", "md", "text"];

/// State of the preview pane.
#[derive(Debug, Default)]
pub struct PreviewState {
    content: String,
    staged: Option<String>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last settled resume content. Empty until a rewrite arrives.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Whether an update is staged but not yet settled.
    pub fn is_updating(&self) -> bool {
        self.staged.is_some()
    }

    /// Stage new resume content, entering the updating state.
    pub fn stage(&mut self, content: impl Into<String>) {
        self.staged = Some(content.into());
    }

    /// Apply the staged content, replacing the previous preview wholesale.
    ///
    /// No-op when nothing is staged.
    pub fn settle(&mut self) {
        if let Some(content) = self.staged.take() {
            self.content = content;
        }
    }

    /// Drop staged and settled content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.staged = None;
    }
}

/// Extract rewritten resume content from an assistant reply, if present.
///
/// A reply carries a rewrite when it contains a fenced code block tagged
/// `resume`/`markdown`/`md`/`text`, or an untagged fenced block of at
/// least [`MIN_UNTAGGED_REWRITE_LINES`] lines. The largest qualifying
/// block wins. Blocks tagged as code (anything else) never qualify.
pub fn extract_rewrite(reply: &str) -> Option<String> {
    let mut best: Option<String> = None;
    let mut in_block = false;
    let mut tag = String::new();
    let mut buf = String::new();

    for line in reply.lines() {
        if let Some(rest) = line.strip_prefix("```") {
            if in_block {
                in_block = false;
                let lines = buf.lines().count();
                let qualifies = REWRITE_TAGS.contains(&tag.as_str())
                    || (tag.is_empty() && lines >= MIN_UNTAGGED_REWRITE_LINES);
                if qualifies {
                    let candidate = buf.trim_end().to_string();
                    let longer = best
                        .as_ref()
                        .map(|b| candidate.len() > b.len())
                        .unwrap_or(true);
                    if longer {
                        best = Some(candidate);
                    }
                }
            } else {
                in_block = true;
                tag = rest.trim().to_lowercase();
                buf.clear();
            }
        } else if in_block {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    best
}
