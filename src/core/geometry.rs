/// Axis-aligned rectangle in viewport pixel space, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// Build from the four edges; width and height are derived.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &ScreenRect) -> bool {
        overlaps(self, other)
    }
}

/// Closed-interval overlap test: rectangles that only share an edge or a
/// corner count as overlapping.
#[inline]
pub fn overlaps(a: &ScreenRect, b: &ScreenRect) -> bool {
    !(a.right < b.left || a.left > b.right || a.bottom < b.top || a.top > b.bottom)
}
