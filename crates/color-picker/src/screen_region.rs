/// Edges of the cross mark indicator in screen coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegion {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScreenRegion {
    /// Create a new region from its edges.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The integer midpoint, rounding toward zero.
    pub fn center(&self) -> (i64, i64) {
        let x = (i64::from(self.left) + i64::from(self.right)) / 2;
        let y = (i64::from(self.top) + i64::from(self.bottom)) / 2;

        (x, y)
    }
}

impl core::fmt::Display for ScreenRegion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "(left {}, top {}, right {}, bottom {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
