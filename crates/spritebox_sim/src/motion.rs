//! Motion simulation: placement at start-up and the per-tick step
//!
//! Each tick moves the object by its velocity, then clamps each axis back
//! into the boundary and negates that axis' velocity if a clamp fired. The
//! two axes are handled independently; only one clamp per axis can fire
//! since the object always fits inside the boundary.

use crate::body::MovingObject;
use crate::boundary::Boundary;
use crate::contact::WallContact;
use crate::error::SimError;
use crate::rng::{SimRng, DEFAULT_MAX_SPEED};
use crate::vec2::Vec2i;

/// Create an object of edge `size` near the middle of `boundary`
///
/// The start position is `dimension / 2 - size / 2` on each axis, with
/// integer truncation on both halves. Velocity components are drawn from
/// `[-5, 5]`.
///
/// # Errors
///
/// [`SimError::InvalidConfiguration`] if `size` is not positive, a boundary
/// dimension is not positive, or `size` exceeds either dimension.
pub fn initialize(
    boundary: Boundary,
    size: i32,
    rng: &mut SimRng,
) -> Result<MovingObject, SimError> {
    initialize_with_max_speed(boundary, size, DEFAULT_MAX_SPEED, rng)
}

/// [`initialize`] with a caller-chosen per-axis speed limit
///
/// # Errors
///
/// As [`initialize`], plus [`SimError::InvalidSpeed`] if `max_speed` is
/// negative or larger than both [`Boundary::max_speed_for`] and the
/// default limit of 5.
pub fn initialize_with_max_speed(
    boundary: Boundary,
    size: i32,
    max_speed: i32,
    rng: &mut SimRng,
) -> Result<MovingObject, SimError> {
    if !boundary.is_valid() || !boundary.fits(size) {
        return Err(SimError::InvalidConfiguration {
            size,
            width: boundary.width,
            height: boundary.height,
        });
    }

    let limit = boundary.max_speed_for(size).max(DEFAULT_MAX_SPEED);
    if !(0..=limit).contains(&max_speed) {
        return Err(SimError::InvalidSpeed { max_speed, limit });
    }

    let position = Vec2i::new(
        boundary.width / 2 - size / 2,
        boundary.height / 2 - size / 2,
    );
    let velocity = rng.random_velocity(max_speed);

    Ok(MovingObject::new(position, size).with_velocity(velocity))
}

/// Advance `object` by one tick inside `boundary`
pub fn tick(object: MovingObject, boundary: &Boundary) -> MovingObject {
    tick_with_contact(object, boundary).0
}

/// Advance `object` by one tick and report which walls were hit
pub fn tick_with_contact(
    mut object: MovingObject,
    boundary: &Boundary,
) -> (MovingObject, WallContact) {
    let size = object.size();
    let mut contact = WallContact::NONE;

    object.position += object.velocity;

    if object.position.x < 0 {
        object.position.x = 0;
        object.velocity.x = -object.velocity.x;
        contact |= WallContact::LEFT;
    } else if object.position.x + size > boundary.width {
        object.position.x = boundary.max_x(size);
        object.velocity.x = -object.velocity.x;
        contact |= WallContact::RIGHT;
    }

    if object.position.y < 0 {
        object.position.y = 0;
        object.velocity.y = -object.velocity.y;
        contact |= WallContact::TOP;
    } else if object.position.y + size > boundary.height {
        object.position.y = boundary.max_y(size);
        object.velocity.y = -object.velocity.y;
        contact |= WallContact::BOTTOM;
    }

    (object, contact)
}

/// A boundary and the object moving inside it
///
/// Owned by the frame driver and advanced once per frame.
#[derive(Clone, Debug)]
pub struct Simulation {
    boundary: Boundary,
    object: MovingObject,
    ticks: u64,
}

impl Simulation {
    /// Place a new object of edge `size` with a random velocity
    pub fn new(boundary: Boundary, size: i32, rng: &mut SimRng) -> Result<Self, SimError> {
        Self::with_max_speed(boundary, size, DEFAULT_MAX_SPEED, rng)
    }

    /// Like [`Simulation::new`] with a caller-chosen per-axis speed limit
    pub fn with_max_speed(
        boundary: Boundary,
        size: i32,
        max_speed: i32,
        rng: &mut SimRng,
    ) -> Result<Self, SimError> {
        let object = initialize_with_max_speed(boundary, size, max_speed, rng)?;
        log::debug!(
            "Simulation start: position ({}, {}), velocity ({}, {}), boundary {}x{}",
            object.position.x,
            object.position.y,
            object.velocity.x,
            object.velocity.y,
            boundary.width,
            boundary.height
        );
        Ok(Self::from_parts(boundary, object))
    }

    /// Wrap an existing object without validating it
    pub fn from_parts(boundary: Boundary, object: MovingObject) -> Self {
        Self {
            boundary,
            object,
            ticks: 0,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) -> WallContact {
        let (object, contact) = tick_with_contact(self.object, &self.boundary);
        self.object = object;
        self.ticks += 1;
        if !contact.is_empty() {
            log::trace!("Tick {}: wall contact {:?}", self.ticks, contact);
        }
        contact
    }

    /// The moving object
    pub fn object(&self) -> &MovingObject {
        &self.object
    }

    /// The boundary
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Number of ticks advanced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
