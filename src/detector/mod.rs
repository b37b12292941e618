//! Secret sequence detection
//!
//! Watches a stream of keyboard events and recognizes a typed secret that
//! unlocks the add/remove panel.

pub mod sequence;

pub use sequence::{
    DetectorOutcome, ESCAPE_KEY, FocusTarget, IgnoreReason, KeyEvent, Modifiers, SequenceDetector,
};
