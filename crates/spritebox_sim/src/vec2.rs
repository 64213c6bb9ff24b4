//! 2D integer vector type

use std::ops::{Add, AddAssign};

/// 2D integer vector, used for pixel positions and per-tick velocities
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new Vec2i
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2i {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = Vec2i::new(364, 264);
        let b = Vec2i::new(4, -3);
        assert_eq!(a + b, Vec2i::new(368, 261));
    }

    #[test]
    fn test_add_assign() {
        let mut a = Vec2i::new(1, 2);
        a += Vec2i::new(10, 20);
        assert_eq!(a, Vec2i::new(11, 22));
    }
}
