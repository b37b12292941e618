//! Sliding-window secret sequence detector
//!
//! Keeps the last N typed characters (N = secret length, in `char`s) and
//! reports a match when the window equals the secret. The window is never
//! reset on a mismatch, only truncated, so arbitrary text before or between
//! attempts is tolerated. After a match the window is cleared, so the same
//! keystrokes cannot match twice.

use crate::error::{Result, ShowcaseError, StringError};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Key name the presentation layer treats as "dismiss"
pub const ESCAPE_KEY: &str = "Escape";

/// Modifier keys held during a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control key
    pub ctrl: bool,
    /// Command / Windows key
    pub meta: bool,
    /// Alt / Option key
    pub alt: bool,
    /// Shift key (does not disqualify a key)
    pub shift: bool,
}

impl Modifiers {
    /// Whether a combo modifier (ctrl, meta or alt) is held
    pub fn has_combo(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// Nothing in particular (page body)
    #[default]
    Body,
    /// A single-line input field
    TextInput,
    /// A multi-line text area
    TextArea,
    /// Any other content-editable region
    ContentEditable,
    /// A non-editable control such as a button
    Control,
}

impl FocusTarget {
    /// Whether typing goes into an editable control
    pub fn is_text_editable(self) -> bool {
        matches!(
            self,
            Self::TextInput | Self::TextArea | Self::ContentEditable
        )
    }
}

/// A keyboard event as seen by the detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value: a single character for printable keys, a name otherwise
    pub key: String,
    /// Held modifiers
    pub modifiers: Modifiers,
    /// Focus at the time of the event
    pub focus: FocusTarget,
}

impl KeyEvent {
    /// An unmodified key press with focus on the page body
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            focus: FocusTarget::Body,
        }
    }

    /// One unmodified key event per character of `text`
    pub fn typed(text: &str) -> impl Iterator<Item = KeyEvent> + '_ {
        text.chars().map(|c| Self::key(c.to_string()))
    }

    /// Same event with different focus
    #[must_use]
    pub fn with_focus(mut self, focus: FocusTarget) -> Self {
        self.focus = focus;
        self
    }

    /// Same event with different modifiers
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether this is the dismiss key
    pub fn is_escape(&self) -> bool {
        self.key == ESCAPE_KEY
    }

    /// The key's character if it is exactly one character long
    fn single_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Why an event did not touch the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Focus was inside an editable control
    EditableFocus,
    /// Control, meta or alt was held
    Modifier,
    /// Key was a named key rather than a single character
    NotACharacter,
}

/// Result of feeding one event to the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorOutcome {
    /// The event did not participate
    Ignored(IgnoreReason),
    /// The character was buffered without completing the secret
    Buffered,
    /// The buffer equalled the secret; it has been cleared
    Matched,
}

/// Sliding-window matcher for a fixed secret
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    secret: Vec<char>,
    buffer: VecDeque<char>,
}

impl SequenceDetector {
    /// Create a detector for `secret`
    ///
    /// The secret is lowercased, since typed characters are lowercased before
    /// comparison. An empty secret is rejected.
    pub fn new(secret: &str) -> Result<Self> {
        let secret: Vec<char> = secret.to_lowercase().chars().collect();
        if secret.is_empty() {
            return Err(ShowcaseError::Config(StringError::new(
                "secret sequence must not be empty",
            )));
        }
        Ok(Self {
            buffer: VecDeque::with_capacity(secret.len()),
            secret,
        })
    }

    /// Feed one keyboard event
    ///
    /// Escape is expected to be intercepted by the caller; if it arrives here it
    /// is ignored like any other named key.
    pub fn feed(&mut self, event: &KeyEvent) -> DetectorOutcome {
        if event.focus.is_text_editable() {
            return DetectorOutcome::Ignored(IgnoreReason::EditableFocus);
        }
        if event.modifiers.has_combo() {
            return DetectorOutcome::Ignored(IgnoreReason::Modifier);
        }
        match event.single_char() {
            Some(c) => self.push_char(c),
            None => DetectorOutcome::Ignored(IgnoreReason::NotACharacter),
        }
    }

    /// Append one character to the window and test for a match
    pub fn push_char(&mut self, c: char) -> DetectorOutcome {
        self.buffer.extend(c.to_lowercase());
        while self.buffer.len() > self.secret.len() {
            self.buffer.pop_front();
        }

        if self.buffer.iter().eq(self.secret.iter()) {
            info!("Secret sequence recognized");
            self.buffer.clear();
            return DetectorOutcome::Matched;
        }

        debug!("Sequence buffer holds {} chars", self.buffer.len());
        DetectorOutcome::Buffered
    }

    /// Drop any partially typed sequence
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Current window contents
    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Secret length in characters (the window size)
    pub fn window_len(&self) -> usize {
        self.secret.len()
    }
}
