//! Test support: a conforming monospace-grid target.
//!
//! [`GridTarget`] lays its text out on a fixed character grid: one row per
//! line, columns measured in display cells (wide CJK codepoints occupy two
//! cells). It exists so that the conformance suite, property tests, and
//! downstream widget authors have a real [`TextInputTarget`] to exercise
//! consumers against; it performs no rendering.
//!
//! Out-of-range input to the mutators is clamped silently, with the clamp
//! reported at debug level through [`crate::event`].

use ropey::Rope;
use unicode_width::UnicodeWidthChar;

use crate::event::log_clamped_range;
use crate::geometry::{Point, Rect, RectList};
use crate::range::CharRange;
use crate::target::{TextInputTarget, VirtualKeyboardType};

/// Display width of a single codepoint in grid cells.
fn cell_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// A rope-backed text-input target with monospace-grid geometry.
///
/// # Examples
///
/// ```
/// use textcap::{GridTarget, Point, TextInputTarget};
///
/// let target = GridTarget::with_text("ab\ncd");
/// assert_eq!(target.total_num_chars(), 5);
/// assert_eq!(target.char_index_for_point(Point::new(1, 1)), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridTarget {
    rope: Rope,
    caret: usize,
    selection: CharRange,
    underlines: Vec<CharRange>,
    read_only: bool,
    keyboard: VirtualKeyboardType,
}

impl GridTarget {
    /// Create an empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a target with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::default()
        }
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the entire text, collapsing caret and selection to the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.caret = 0;
        self.selection = CharRange::default();
        self.underlines.clear();
    }

    /// Move the caret, clamping to the buffer length.
    pub fn set_caret(&mut self, index: usize) {
        self.caret = index.min(self.rope.len_chars());
    }

    /// Put the target in or out of read-only mode.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Override the advisory keyboard type.
    pub fn set_keyboard_type(&mut self, keyboard: VirtualKeyboardType) {
        self.keyboard = keyboard;
    }

    /// The current temporary underline regions.
    ///
    /// The trait itself exposes no underline getter; this accessor lets
    /// tests and renderers observe composition state.
    #[must_use]
    pub fn temporary_underlines(&self) -> &[CharRange] {
        &self.underlines
    }

    /// Grid row and cell column of a codepoint index.
    fn row_col(&self, index: usize) -> (usize, usize) {
        let index = index.min(self.rope.len_chars());
        let row = self.rope.char_to_line(index);
        let line_start = self.rope.line_to_char(row);
        let col = self
            .rope
            .slice(line_start..index)
            .chars()
            .map(cell_width)
            .sum();
        (row, col)
    }
}

impl TextInputTarget for GridTarget {
    fn is_input_active(&self) -> bool {
        !self.read_only
    }

    fn highlighted_region(&self) -> CharRange {
        self.selection
    }

    fn set_highlighted_region(&mut self, range: CharRange) {
        let clamped = range.clamped(self.rope.len_chars());
        if clamped != range.normalized() {
            log_clamped_range("set_highlighted_region", range, clamped);
        }
        self.selection = clamped;
    }

    fn set_temporary_underlining(&mut self, regions: &[CharRange]) {
        let len = self.rope.len_chars();
        self.underlines.clear();
        for region in regions {
            let clamped = region.clamped(len);
            if clamped != region.normalized() {
                log_clamped_range("set_temporary_underlining", *region, clamped);
            }
            // A region clamped down to nothing marks no text.
            if !clamped.is_empty() {
                self.underlines.push(clamped);
            }
        }
    }

    fn text_in_range(&self, range: CharRange) -> String {
        let range = range.clamped(self.rope.len_chars());
        self.rope.slice(range.start..range.end).to_string()
    }

    fn insert_text_at_caret(&mut self, text: &str) {
        let selection = self.selection.clamped(self.rope.len_chars());
        if !selection.is_empty() {
            self.rope.remove(selection.start..selection.end);
            self.caret = selection.start;
        }
        let at = self.caret.min(self.rope.len_chars());
        self.rope.insert(at, text);
        self.caret = at + text.chars().count();
        self.selection = CharRange::empty_at(self.caret);
    }

    fn caret_position(&self) -> usize {
        self.caret
    }

    fn caret_rect_for_char_index(&self, index: usize) -> Rect {
        let index = index.min(self.rope.len_chars());
        let (row, col) = self.row_col(index);
        let width = match self.rope.get_char(index) {
            Some(ch) if ch != '\n' => cell_width(ch).max(1),
            _ => 1, // caret past the last char on its line
        };
        Rect::new(col as i32, row as i32, width as u32, 1)
    }

    fn total_num_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_index_for_point(&self, point: Point) -> usize {
        let row = (point.y.max(0) as usize).min(self.rope.len_lines().saturating_sub(1));
        let target_x = point.x.max(0) as usize;
        let line_start = self.rope.line_to_char(row);
        let line = self.rope.line(row);

        let mut col = 0usize;
        let mut index = line_start;
        for ch in line.chars() {
            if ch == '\n' {
                break;
            }
            let width = cell_width(ch);
            // Zero-width codepoints attach to the cell before them.
            if width > 0 && target_x < col + width {
                return index;
            }
            col += width;
            index += 1;
        }
        index
    }

    fn text_bounds(&self, range: CharRange) -> RectList {
        let range = range.clamped(self.rope.len_chars());
        if range.is_empty() {
            return RectList::new();
        }

        let start_row = self.rope.char_to_line(range.start);
        let end_row = self.rope.char_to_line(range.end - 1);
        let mut list = RectList::new();
        for row in start_row..=end_row {
            let line_start = self.rope.line_to_char(row);
            let line_end = line_start + self.rope.line(row).len_chars();
            let seg_start = range.start.max(line_start);
            let seg_end = range.end.min(line_end);
            let x: usize = self
                .rope
                .slice(line_start..seg_start)
                .chars()
                .map(cell_width)
                .sum();
            let width: usize = self
                .rope
                .slice(seg_start..seg_end)
                .chars()
                .filter(|&ch| ch != '\n')
                .map(cell_width)
                .sum();
            // A row covered only by its line break still marks the break.
            list.push(Rect::new(x as i32, row as i32, width.max(1) as u32, 1));
        }
        list
    }

    fn keyboard_type(&self) -> VirtualKeyboardType {
        self.keyboard
    }
}
