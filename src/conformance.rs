//! Conformance checks for text-input target implementations.
//!
//! Each function verifies one property that must hold for any conforming
//! [`TextInputTarget`], panicking with a descriptive message on violation,
//! so the checks slot directly into `#[test]` bodies:
//!
//! ```
//! use textcap::{GridTarget, conformance};
//!
//! let mut target = GridTarget::with_text("hello\nworld");
//! conformance::run_all(&mut target, "ab");
//! ```
//!
//! The mutating checks assume the target accepts input
//! ([`is_input_active`](TextInputTarget::is_input_active) returns true) and
//! will change its content.

use crate::geometry::Point;
use crate::range::CharRange;
use crate::target::{TextInputTarget, VirtualKeyboardType};

/// Caret geometry is defined and deterministic for every valid index.
pub fn check_caret_rect_determinism<T: TextInputTarget>(target: &T) {
    for index in 0..=target.total_num_chars() {
        let first = target.caret_rect_for_char_index(index);
        let second = target.caret_rect_for_char_index(index);
        assert_eq!(
            first, second,
            "caret rect for index {index} changed between identical queries"
        );
    }
}

/// `caret_rect()` matches `caret_rect_for_char_index(caret_position())`.
pub fn check_caret_rect_convenience<T: TextInputTarget>(target: &T) {
    let position = target.caret_position();
    assert_eq!(
        target.caret_rect(),
        target.caret_rect_for_char_index(position),
        "caret_rect() disagrees with caret_rect_for_char_index({position})"
    );
}

/// In-bounds selections round-trip through the setter and getter.
pub fn check_selection_round_trip<T: TextInputTarget>(target: &mut T) {
    let len = target.total_num_chars();
    let candidates = [
        CharRange::empty_at(0),
        CharRange::empty_at(len),
        CharRange::new(0, len),
        CharRange::new(len / 2, len),
        CharRange::new(0, len / 2),
    ];
    for range in candidates {
        target.set_highlighted_region(range);
        assert_eq!(
            target.highlighted_region(),
            range,
            "in-bounds selection {range:?} did not round-trip"
        );
    }
}

/// Inserting with an empty selection grows the text and advances the caret
/// by the inserted codepoint count.
pub fn check_insert_at_caret<T: TextInputTarget>(target: &mut T, sample: &str) {
    let caret = target.caret_position();
    target.set_highlighted_region(CharRange::empty_at(caret));

    let chars_before = target.total_num_chars();
    let caret_before = target.caret_position();
    target.insert_text_at_caret(sample);

    let inserted = sample.chars().count();
    assert_eq!(
        target.total_num_chars(),
        chars_before + inserted,
        "total_num_chars did not grow by the inserted codepoint count"
    );
    assert_eq!(
        target.caret_position(),
        caret_before + inserted,
        "caret did not advance by the inserted codepoint count"
    );
}

/// An index found from a point maps back to a rect containing or adjacent
/// to that point.
pub fn check_point_index_consistency<T: TextInputTarget>(target: &T) {
    for index in 0..=target.total_num_chars() {
        let rect = target.caret_rect_for_char_index(index);
        let point = Point::new(rect.x, rect.y);
        let found = target.char_index_for_point(point);
        let found_rect = target.caret_rect_for_char_index(found);
        assert!(
            found_rect.contains(point) || found_rect.right() == point.x || found_rect.x == point.x,
            "point {point:?} resolved to index {found} whose rect {found_rect:?} is not at the point"
        );
    }
}

/// `keyboard_type()` reports the generic text keyboard.
///
/// Only meaningful for targets that do not override the default.
pub fn check_default_keyboard_type<T: TextInputTarget>(target: &T) {
    assert_eq!(
        target.keyboard_type(),
        VirtualKeyboardType::Text,
        "non-overridden keyboard_type() must be the generic text keyboard"
    );
}

/// Run every check against a target.
///
/// `sample` is the text used by the insertion check. Read-only checks run
/// first; the mutating checks then change the target's content.
pub fn run_all<T: TextInputTarget>(target: &mut T, sample: &str) {
    check_caret_rect_determinism(target);
    check_caret_rect_convenience(target);
    check_point_index_consistency(target);
    check_selection_round_trip(target);
    check_insert_at_caret(target, sample);
}
