//! Property-based tests for the text-input capability.
//!
//! Uses proptest to verify trait invariants that must hold across all
//! valid inputs, exercised through the grid reference target.

use proptest::prelude::*;
use textcap::{CharRange, Composer, GridTarget, Point, TextInputTarget};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary printable text, possibly multi-line.
fn document() -> impl Strategy<Value = String> {
    "(\\PC{0,40}\n){0,5}\\PC{0,40}"
}

/// Text to insert, including wide and combining codepoints.
fn insertion() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a".to_string(),
            "Z9".to_string(),
            " ".to_string(),
            "\n".to_string(),
            "中".to_string(),
            "🙂".to_string(),
            "e\u{301}".to_string(),
        ]),
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

/// Arbitrary range with offsets up to twice the document length.
fn wild_range(max: usize) -> impl Strategy<Value = CharRange> {
    let bound = max * 2 + 4;
    (0..bound, 0..bound).prop_map(|(start, end)| CharRange::new(start, end))
}

// ============================================================================
// Caret and insertion properties
// ============================================================================

proptest! {
    /// Inserting with an empty selection grows the buffer and advances the
    /// caret by the inserted codepoint count.
    #[test]
    fn insert_grows_by_codepoint_count(text in document(), caret in 0usize..200, inserted in insertion()) {
        let mut target = GridTarget::with_text(&text);
        target.set_caret(caret);
        let caret_before = target.caret_position();
        let chars_before = target.total_num_chars();

        target.insert_text_at_caret(&inserted);

        let count = inserted.chars().count();
        prop_assert_eq!(target.total_num_chars(), chars_before + count);
        prop_assert_eq!(target.caret_position(), caret_before + count);
    }

    /// Inserting over a selection removes exactly the selected codepoints.
    #[test]
    fn insert_over_selection_accounts_for_removal(
        text in document(),
        range in wild_range(100),
        inserted in insertion(),
    ) {
        let mut target = GridTarget::with_text(&text);
        target.set_highlighted_region(range);
        let selected = target.highlighted_region().len();
        let chars_before = target.total_num_chars();

        target.insert_text_at_caret(&inserted);

        let count = inserted.chars().count();
        prop_assert_eq!(target.total_num_chars(), chars_before - selected + count);
        prop_assert!(target.highlighted_region().is_empty());
    }

    /// The caret never escapes `[0, total_num_chars()]`.
    #[test]
    fn caret_stays_in_bounds(text in document(), caret in 0usize..500) {
        let mut target = GridTarget::with_text(&text);
        target.set_caret(caret);
        prop_assert!(target.caret_position() <= target.total_num_chars());
    }

    /// The convenience caret rect always matches the indexed query.
    #[test]
    fn caret_rect_matches_indexed_query(text in document(), caret in 0usize..200) {
        let mut target = GridTarget::with_text(&text);
        target.set_caret(caret);
        prop_assert_eq!(
            target.caret_rect(),
            target.caret_rect_for_char_index(target.caret_position())
        );
    }
}

// ============================================================================
// Selection and range properties
// ============================================================================

proptest! {
    /// Selections round-trip after clamping and normalization.
    #[test]
    fn selection_setter_getter_round_trip(text in document(), range in wild_range(100)) {
        let mut target = GridTarget::with_text(&text);
        target.set_highlighted_region(range);

        let stored = target.highlighted_region();
        prop_assert_eq!(stored, range.clamped(target.total_num_chars()));

        // Setting an already-valid range is idempotent.
        target.set_highlighted_region(stored);
        prop_assert_eq!(target.highlighted_region(), stored);
    }

    /// `text_in_range` never panics and matches the codepoint slice.
    #[test]
    fn text_in_range_matches_char_slice(text in document(), range in wild_range(100)) {
        let target = GridTarget::with_text(&text);
        let clamped = range.clamped(target.total_num_chars());

        let expected: String = text
            .chars()
            .skip(clamped.start)
            .take(clamped.len())
            .collect();
        prop_assert_eq!(target.text_in_range(range), expected);
    }

    /// The full-range query reproduces the document.
    #[test]
    fn full_range_returns_whole_text(text in document()) {
        let target = GridTarget::with_text(&text);
        let full = CharRange::new(0, target.total_num_chars());
        prop_assert_eq!(target.text_in_range(full), text);
    }

    /// Underline regions are always stored in-bounds and non-empty.
    #[test]
    fn underlines_stored_in_bounds(
        text in document(),
        regions in prop::collection::vec(wild_range(100), 0..6),
    ) {
        let mut target = GridTarget::with_text(&text);
        target.set_temporary_underlining(&regions);

        let len = target.total_num_chars();
        for region in target.temporary_underlines() {
            prop_assert!(!region.is_empty());
            prop_assert!(region.start <= region.end);
            prop_assert!(region.end <= len);
        }
    }
}

// ============================================================================
// Geometry properties
// ============================================================================

proptest! {
    /// Point lookup always produces a valid caret index.
    #[test]
    fn point_lookup_stays_in_bounds(text in document(), x in -50i32..200, y in -50i32..50) {
        let target = GridTarget::with_text(&text);
        let index = target.char_index_for_point(Point::new(x, y));
        prop_assert!(index <= target.total_num_chars());
    }

    /// Looking up the point at a caret rect's origin maps back to a rect
    /// touching that point.
    #[test]
    fn point_and_index_agree(text in document(), index in 0usize..120) {
        let target = GridTarget::with_text(&text);
        let index = index.min(target.total_num_chars());

        let rect = target.caret_rect_for_char_index(index);
        let point = Point::new(rect.x, rect.y);
        let found = target.caret_rect_for_char_index(target.char_index_for_point(point));
        prop_assert!(
            found.contains(point) || found.right() == point.x || found.x == point.x,
            "index {} rect {:?} resolved to {:?}", index, rect, found
        );
    }

    /// Text bounds produce one rect per spanned line, in document order.
    #[test]
    fn text_bounds_one_rect_per_line(text in document(), range in wild_range(100)) {
        let target = GridTarget::with_text(&text);
        let bounds = target.text_bounds(range);

        let clamped = range.clamped(target.total_num_chars());
        if clamped.is_empty() {
            prop_assert!(bounds.is_empty());
        } else {
            // A trailing newline belongs to the row it ends, so it opens no
            // new rect; count breaks before the last covered codepoint only.
            let covered: Vec<char> = target.text_in_range(clamped).chars().collect();
            let spanned = covered[..covered.len() - 1]
                .iter()
                .filter(|&&ch| ch == '\n')
                .count()
                + 1;
            prop_assert_eq!(bounds.len(), spanned);

            let rows: Vec<i32> = bounds.iter().map(|r| r.y).collect();
            let mut sorted = rows.clone();
            sorted.sort_unstable();
            prop_assert_eq!(rows, sorted);
        }
    }

    /// The bounding box of a range's rects covers every individual rect.
    #[test]
    fn bounding_box_covers_all_rects(text in document(), range in wild_range(100)) {
        let target = GridTarget::with_text(&text);
        let bounds = target.text_bounds(range);
        if let Some(bounding) = bounds.bounding_box() {
            for rect in &bounds {
                prop_assert!(bounding.x <= rect.x);
                prop_assert!(bounding.y <= rect.y);
                prop_assert!(bounding.right() >= rect.right());
                prop_assert!(bounding.bottom() >= rect.bottom());
            }
        }
    }
}

// ============================================================================
// Composition properties
// ============================================================================

proptest! {
    /// Composing through updates then committing gives the same document
    /// as inserting the final text directly.
    #[test]
    fn composition_commit_equals_direct_insert(
        text in document(),
        caret in 0usize..120,
        stages in prop::collection::vec(insertion(), 0..4),
        final_text in insertion(),
    ) {
        let mut composed = GridTarget::with_text(&text);
        composed.set_caret(caret);
        let mut composer = Composer::new();
        for stage in &stages {
            composer.update(&mut composed, stage, &[]);
        }
        composer.commit(&mut composed, &final_text);

        let mut direct = GridTarget::with_text(&text);
        direct.set_caret(caret);
        direct.insert_text_at_caret(&final_text);

        prop_assert_eq!(composed.text(), direct.text());
        prop_assert_eq!(composed.caret_position(), direct.caret_position());
        prop_assert!(composed.temporary_underlines().is_empty());
    }

    /// Cancelling a composition restores the original document.
    #[test]
    fn composition_cancel_restores_text(
        text in document(),
        caret in 0usize..120,
        stages in prop::collection::vec(insertion(), 1..4),
    ) {
        let mut target = GridTarget::with_text(&text);
        target.set_caret(caret);

        let mut composer = Composer::new();
        for stage in &stages {
            composer.update(&mut target, stage, &[CharRange::new(0, stage.chars().count())]);
        }
        composer.cancel(&mut target);

        prop_assert_eq!(target.text(), text);
        prop_assert!(target.temporary_underlines().is_empty());
        prop_assert!(!composer.is_composing());
    }
}
