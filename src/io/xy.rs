//! Just the `XY` type.

use std::fmt;

/// A position or size on the terminal grid, with an X (column) and a Y (row) component.
///
/// `XY(0, 0)` is the top left of the screen and `XY(0, 1)` is just below it.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct XY(pub usize, pub usize);

impl XY {
    /// The X component
    pub const fn x(&self) -> usize {
        self.0
    }

    /// The Y component
    pub const fn y(&self) -> usize {
        self.1
    }

    /// Whether this size is at least as big as `other` in both dimensions.
    pub fn fits(&self, other: XY) -> bool {
        self.0 >= other.0 && self.1 >= other.1
    }

    /// Subtract elementwise, stopping at zero instead of underflowing.
    pub fn saturating_sub(self, rhs: XY) -> XY {
        XY(self.0.saturating_sub(rhs.0), self.1.saturating_sub(rhs.1))
    }
}

impl fmt::Debug for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XY({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn xy_saturates_at_zero() {
        assert_eq!(XY(3, 10).saturating_sub(XY(5, 4)), XY(0, 6));
    }

    #[test]
    fn xy_fits_needs_both_dimensions() {
        assert!(XY(80, 24).fits(XY(80, 24)));
        assert!(XY(100, 30).fits(XY(80, 24)));
        assert!(!XY(100, 20).fits(XY(80, 24)));
        assert!(!XY(60, 30).fits(XY(80, 24)));
    }
}
