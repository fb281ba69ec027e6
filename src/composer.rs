//! Multi-stage composition over any text-input target.
//!
//! [`Composer`] plays the consumer role of an input-method front end: it
//! owns the composing run inside a target's text and drives the target
//! exclusively through the [`TextInputTarget`] trait - replacing the run as
//! composition candidates change, marking it with temporary underlines, and
//! committing or cancelling it. No platform binding is involved; a platform
//! IME layer would translate its events into these calls.
//!
//! # Examples
//!
//! ```
//! use textcap::{CharRange, Composer, GridTarget, TextInputTarget};
//!
//! let mut target = GridTarget::with_text("x");
//! target.set_caret(1);
//!
//! let mut composer = Composer::new();
//! composer.update(&mut target, "ni", &[CharRange::new(0, 2)]);
//! composer.update(&mut target, "你", &[CharRange::new(0, 1)]);
//! composer.commit(&mut target, "你");
//!
//! assert_eq!(target.text(), "x你");
//! assert!(target.temporary_underlines().is_empty());
//! assert!(!composer.is_composing());
//! ```

use crate::range::CharRange;
use crate::target::TextInputTarget;

/// Drives a [`TextInputTarget`] through multi-stage text composition.
///
/// At most one composing run is active at a time. The run always lies
/// within `[0, target.total_num_chars()]`; the composer keeps it in sync by
/// performing every edit through the trait's own mutators.
#[derive(Debug, Default)]
pub struct Composer {
    composing: Option<CharRange>,
}

impl Composer {
    /// Create a composer with no active composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a composition is in progress.
    #[must_use]
    pub fn is_composing(&self) -> bool {
        self.composing.is_some()
    }

    /// The range currently occupied by composing text, if any.
    #[must_use]
    pub fn composing_range(&self) -> Option<CharRange> {
        self.composing
    }

    /// Start a composition at the target's insertion point.
    ///
    /// Any selected text is removed first, the way typing over a selection
    /// would remove it. No-op if already composing.
    pub fn begin(&mut self, target: &mut dyn TextInputTarget) {
        if self.composing.is_some() {
            return;
        }
        if !target.highlighted_region().is_empty() {
            target.insert_text_at_caret("");
        }
        self.composing = Some(CharRange::empty_at(target.caret_position()));
    }

    /// Replace the composing run with `text` and underline parts of it.
    ///
    /// `underlines` are ranges relative to `text`; they are translated to
    /// absolute offsets and applied through
    /// [`set_temporary_underlining`](TextInputTarget::set_temporary_underlining).
    /// Implicitly begins a composition when none is active.
    pub fn update(
        &mut self,
        target: &mut dyn TextInputTarget,
        text: &str,
        underlines: &[CharRange],
    ) {
        self.begin(target);
        let Some(run) = self.composing else {
            return;
        };

        Self::replace_run(target, run, text);
        let len = text.chars().count();
        let run = CharRange::new(run.start, run.start + len);
        self.composing = Some(run);

        let absolute: Vec<CharRange> = underlines
            .iter()
            .map(|region| region.clamped(len).shifted(run.start))
            .collect();
        target.set_temporary_underlining(&absolute);
    }

    /// Replace the composing run with final text and end the composition.
    ///
    /// With no active composition the text is inserted at the caret, which
    /// is how single-shot commits from an IME arrive.
    pub fn commit(&mut self, target: &mut dyn TextInputTarget, text: &str) {
        if let Some(run) = self.composing.take() {
            Self::replace_run(target, run, text);
        } else {
            target.insert_text_at_caret(text);
        }
        target.set_temporary_underlining(&[]);
    }

    /// Delete the composing run and end the composition.
    pub fn cancel(&mut self, target: &mut dyn TextInputTarget) {
        if let Some(run) = self.composing.take() {
            Self::replace_run(target, run, "");
        }
        target.set_temporary_underlining(&[]);
    }

    fn replace_run(target: &mut dyn TextInputTarget, run: CharRange, text: &str) {
        target.set_highlighted_region(run);
        target.insert_text_at_caret(text);
    }
}
