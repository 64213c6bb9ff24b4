//! The single moving object of the bounce demo

use crate::boundary::Boundary;
use crate::vec2::Vec2i;

/// A square sprite moving at a constant integer velocity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovingObject {
    /// Top-left corner in pixels
    pub position: Vec2i,
    /// Displacement per tick in pixels
    pub velocity: Vec2i,
    /// Edge length in pixels, fixed for the object's lifetime
    size: i32,
}

impl MovingObject {
    /// Create an object at `position` with zero velocity
    pub fn new(position: Vec2i, size: i32) -> Self {
        Self {
            position,
            velocity: Vec2i::ZERO,
            size,
        }
    }

    /// Set the velocity of this object
    pub fn with_velocity(mut self, velocity: Vec2i) -> Self {
        self.velocity = velocity;
        self
    }

    /// Edge length in pixels
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether the object lies entirely inside `boundary`
    pub fn is_contained_in(&self, boundary: &Boundary) -> bool {
        (0..=boundary.max_x(self.size)).contains(&self.position.x)
            && (0..=boundary.max_y(self.size)).contains(&self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object() {
        let obj = MovingObject::new(Vec2i::new(364, 264), 72);
        assert_eq!(obj.position, Vec2i::new(364, 264));
        assert_eq!(obj.velocity, Vec2i::ZERO);
        assert_eq!(obj.size(), 72);
    }

    #[test]
    fn test_containment() {
        let b = Boundary::new(800, 600);
        assert!(MovingObject::new(Vec2i::new(0, 0), 72).is_contained_in(&b));
        assert!(MovingObject::new(Vec2i::new(728, 528), 72).is_contained_in(&b));
        assert!(!MovingObject::new(Vec2i::new(729, 0), 72).is_contained_in(&b));
        assert!(!MovingObject::new(Vec2i::new(0, -1), 72).is_contained_in(&b));
    }
}
