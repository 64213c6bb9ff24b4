//! The fixed rectangular area a moving object is confined to

/// Drawable area in pixels, origin top-left
///
/// Supplied once by the display surface and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundary {
    pub width: i32,
    pub height: i32,
}

impl Boundary {
    /// Create a new boundary
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether a square of edge `size` fits inside on both axes
    pub fn fits(&self, size: i32) -> bool {
        size > 0 && size <= self.width && size <= self.height
    }

    /// Free space left on the narrower axis by an object of edge `size`
    ///
    /// The largest per-tick speed that keeps a single step inside one
    /// boundary width, so the step never overflows.
    pub fn max_speed_for(&self, size: i32) -> i32 {
        self.max_x(size).min(self.max_y(size))
    }

    /// Largest legal x for an object of edge `size`
    #[inline]
    pub fn max_x(&self, size: i32) -> i32 {
        self.width - size
    }

    /// Largest legal y for an object of edge `size`
    #[inline]
    pub fn max_y(&self, size: i32) -> i32 {
        self.height - size
    }
}

impl From<(u32, u32)> for Boundary {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits() {
        let b = Boundary::new(800, 600);
        assert!(b.fits(72));
        assert!(b.fits(600));
        assert!(!b.fits(601));
        assert!(!b.fits(0));
        assert!(!b.fits(-4));
    }

    #[test]
    fn test_max_extents() {
        let b = Boundary::new(800, 600);
        assert_eq!(b.max_x(72), 728);
        assert_eq!(b.max_y(72), 528);
        assert_eq!(b.max_speed_for(72), 528);
        assert_eq!(b.max_speed_for(600), 0);
    }

    #[test]
    fn test_validity() {
        assert!(Boundary::new(1, 1).is_valid());
        assert!(!Boundary::new(0, 600).is_valid());
        assert!(!Boundary::new(800, -1).is_valid());
    }

    #[test]
    fn test_from_window_size() {
        assert_eq!(Boundary::from((800u32, 600u32)), Boundary::new(800, 600));
    }
}
