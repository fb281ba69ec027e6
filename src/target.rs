//! The text-input capability trait.
//!
//! [`TextInputTarget`] is the contract a text-editing widget satisfies so
//! that external consumers - platform input methods, on-screen keyboards,
//! accessibility layers - can query and manipulate its caret, selection,
//! and text geometry without knowing the widget's concrete type.
//!
//! The trait is a stateless query/mutation facade over whatever text-buffer
//! state the implementing widget owns. It defines no error conditions:
//! out-of-range input to the mutating operations is the implementer's
//! responsibility, and the implementations in this crate clamp silently
//! (logging the clamp at debug level through [`crate::event`]).
//!
//! # Examples
//!
//! ```
//! use textcap::{CharRange, GridTarget, TextInputTarget};
//!
//! let mut target = GridTarget::with_text("hello world");
//! target.set_highlighted_region(CharRange::new(0, 5));
//! assert_eq!(target.text_in_range(target.highlighted_region()), "hello");
//!
//! target.insert_text_at_caret("goodbye");
//! assert_eq!(target.text(), "goodbye world");
//! assert_eq!(target.caret_position(), 7);
//! ```

use crate::geometry::{Point, Rect, RectList};
use crate::range::CharRange;

/// Preferred on-screen keyboard layout for a text-input target.
///
/// Purely advisory; platform input surfaces may ignore it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VirtualKeyboardType {
    /// Generic text keyboard.
    #[default]
    Text,
    /// Integer-only keyboard.
    Numeric,
    /// Numeric keyboard with a decimal separator.
    Decimal,
    /// Keyboard tuned for URL entry.
    Url,
    /// Keyboard tuned for email addresses.
    EmailAddress,
    /// Telephone keypad.
    PhoneNumber,
    /// Keyboard for password entry (suggestions disabled).
    Password,
}

/// Capability implemented by widgets that function as text editors.
///
/// All indices count Unicode codepoints in `[0, total_num_chars()]`; all
/// geometry is in the widget's local coordinate space. Calls are expected
/// to come from the thread that owns the widget; the trait imposes no
/// locking and requires neither `Send` nor `Sync`.
pub trait TextInputTarget {
    /// Returns true if this target currently accepts input.
    ///
    /// A widget might return false when read-only or unfocused.
    fn is_input_active(&self) -> bool;

    /// The selected text region, or an empty range if nothing is selected.
    fn highlighted_region(&self) -> CharRange;

    /// Set the currently-selected text region.
    ///
    /// The implementing widget defines its own policy for out-of-range
    /// input; see the module docs for the policy used in this crate.
    fn set_highlighted_region(&mut self, range: CharRange);

    /// Replace all temporarily underlined sections with `regions`.
    ///
    /// Temporary underlines visualize in-progress composition during
    /// multi-stage text input. An empty slice clears every underline.
    fn set_temporary_underlining(&mut self, regions: &[CharRange]);

    /// The sub-section of the text covered by `range`.
    fn text_in_range(&self, range: CharRange) -> String;

    /// Insert text, overwriting the selected region if there is one.
    ///
    /// With an empty selection the text is inserted at the caret. The caret
    /// moves to the end of the inserted text and the selection collapses
    /// onto it.
    fn insert_text_at_caret(&mut self, text: &str);

    /// Current codepoint index of the caret.
    fn caret_position(&self) -> usize;

    /// Bounding box of the caret at its current position.
    ///
    /// Provided once at the trait level; widgets implement
    /// [`caret_rect_for_char_index`](Self::caret_rect_for_char_index)
    /// instead.
    fn caret_rect(&self) -> Rect {
        self.caret_rect_for_char_index(self.caret_position())
    }

    /// Bounding box of the caret if placed at `index`.
    fn caret_rect_for_char_index(&self, index: usize) -> Rect;

    /// Total number of codepoints in the widget's text.
    fn total_num_chars(&self) -> usize;

    /// The codepoint index closest to `point`.
    ///
    /// This is where the caret would land after a click at `point`.
    fn char_index_for_point(&self, point: Point) -> usize;

    /// Bounding boxes covering `range`, one per visual line it spans.
    ///
    /// Boxes may extend beyond the widget's own bounds when wrapping is
    /// disabled and the text is long.
    fn text_bounds(&self, range: CharRange) -> RectList;

    /// The target's preferred on-screen keyboard.
    ///
    /// Defaults to [`VirtualKeyboardType::Text`]; a numeric-only field
    /// would override this to return [`VirtualKeyboardType::Numeric`].
    fn keyboard_type(&self) -> VirtualKeyboardType {
        VirtualKeyboardType::Text
    }
}
