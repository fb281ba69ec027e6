//! Widget-local cell geometry.
//!
//! Coordinates are integer text cells relative to the widget's top-left
//! corner. Rectangles produced by geometry queries may extend beyond the
//! widget's own bounds when wrapping is disabled and text is long.

/// A point in a widget's local coordinate space.
///
/// Signed because pointer coordinates handed in by a consumer may lie
/// outside the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in a widget's local coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check if a point falls inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self {
            x,
            y,
            width: (right - x) as u32,
            height: (bottom - y) as u32,
        }
    }
}

/// Bounding boxes covering a character range, one per visual line.
///
/// Returned by [`TextInputTarget::text_bounds`](crate::TextInputTarget::text_bounds).
/// Rectangles appear in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RectList {
    rects: Vec<Rect>,
}

impl RectList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rectangle.
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Number of rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Iterate over the rectangles.
    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    /// Access the rectangles as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// Union of all rectangles, or `None` if the list is empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        self.rects
            .iter()
            .copied()
            .reduce(|acc, rect| acc.union(rect))
    }
}

impl From<Vec<Rect>> for RectList {
    fn from(rects: Vec<Rect>) -> Self {
        Self { rects }
    }
}

impl<'a> IntoIterator for &'a RectList {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

impl IntoIterator for RectList {
    type Item = Rect;
    type IntoIter = std::vec::IntoIter<Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}
