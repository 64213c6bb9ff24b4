//! Bouncing ball frame logic
//!
//! Owns the simulation and the ball's texture. Each due frame advances the
//! simulation by one tick; the draw is the ball's current rectangle.

use spritebox_render::{Rect, SpriteDraw, TextureKey};
use spritebox_sim::{Boundary, SimError, SimRng, Simulation, WallContact};

use crate::config::BounceConfig;

/// Bounce demo state
pub struct BounceSystem {
    simulation: Simulation,
    sprite: TextureKey,
}

impl BounceSystem {
    /// Place the ball in the middle of `boundary` with a random velocity
    pub fn new(
        config: &BounceConfig,
        boundary: Boundary,
        rng: &mut SimRng,
        sprite: TextureKey,
    ) -> Result<Self, SimError> {
        let size = i32::try_from(config.size).unwrap_or(i32::MAX);
        let simulation = Simulation::with_max_speed(boundary, size, config.max_speed, rng)?;
        Ok(Self { simulation, sprite })
    }

    /// Advance one tick
    pub fn update(&mut self) -> WallContact {
        self.simulation.tick()
    }

    /// Where to draw the ball now
    pub fn draw(&self) -> SpriteDraw {
        let obj = self.simulation.object();
        let size = obj.size().unsigned_abs();
        SpriteDraw::new(
            self.sprite,
            Rect::new(obj.position.x, obj.position.y, size, size),
        )
    }

    /// Short status string for the window title
    pub fn status(&self) -> String {
        let obj = self.simulation.object();
        format!(
            "({}, {}) v=({}, {})",
            obj.position.x, obj.position.y, obj.velocity.x, obj.velocity.y
        )
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}
