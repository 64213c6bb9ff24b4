//! Motion simulation for spritebox
//!
//! This crate owns the one piece of state-driven logic in the demos: a single
//! square sprite moving at a constant integer velocity inside a fixed
//! rectangular boundary, reflecting off the walls.
//!
//! - [`Boundary`] - the fixed drawable area
//! - [`MovingObject`] - position, velocity and size of the sprite
//! - [`initialize`] / [`tick`] - the pure simulation operations
//! - [`Simulation`] - owned boundary + object pair driven by the frame loop
//! - [`WallContact`] - which walls were hit during a tick
//! - [`SimRng`] - the process-wide random source used at start-up

pub mod body;
pub mod boundary;
pub mod contact;
pub mod error;
pub mod motion;
pub mod rng;
pub mod vec2;

pub use body::MovingObject;
pub use boundary::Boundary;
pub use contact::WallContact;
pub use error::SimError;
pub use motion::{initialize, initialize_with_max_speed, tick, tick_with_contact, Simulation};
pub use rng::{SimRng, DEFAULT_MAX_SPEED};
pub use vec2::Vec2i;
