//! Wall contact report for a single tick

use bitflags::bitflags;

bitflags! {
    /// Walls whose clamp fired during a tick
    ///
    /// Recomputed from scratch on every tick; nothing carries over.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct WallContact: u8 {
        /// No wall touched
        const NONE = 0;
        /// Clamped at x = 0
        const LEFT = 1 << 0;
        /// Clamped at x = width - size
        const RIGHT = 1 << 1;
        /// Clamped at y = 0
        const TOP = 1 << 2;
        /// Clamped at y = height - size
        const BOTTOM = 1 << 3;
    }
}

impl WallContact {
    /// Whether the x velocity was reflected
    pub fn reflected_x(self) -> bool {
        self.intersects(Self::LEFT | Self::RIGHT)
    }

    /// Whether the y velocity was reflected
    pub fn reflected_y(self) -> bool {
        self.intersects(Self::TOP | Self::BOTTOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_queries() {
        let c = WallContact::RIGHT | WallContact::TOP;
        assert!(c.reflected_x());
        assert!(c.reflected_y());
        assert!(!WallContact::NONE.reflected_x());
        assert!(!WallContact::LEFT.reflected_y());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(WallContact::default().is_empty());
    }
}
