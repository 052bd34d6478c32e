//! The falling/flapping entity.

use crate::core::constants::{AVATAR_HEIGHT, AVATAR_START_Y, FIELD_HEIGHT, FLAP_ANIM_TICKS};

/// Avatar state. Horizontal position is fixed (`AVATAR_X`); only the
/// vertical axis is simulated.
#[derive(Debug, Clone)]
pub struct Avatar {
    /// Vertical center in field units.
    pub y: f64,
    /// Vertical velocity in units/second (positive = downward).
    pub velocity: f64,
    /// Physics ticks remaining on the flap animation.
    pub flap_timer: u32,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            y: AVATAR_START_Y,
            velocity: 0.0,
            flap_timer: 0,
        }
    }

    /// Apply the upward impulse: velocity is overridden, not added, so
    /// rapid flaps do not stack.
    pub fn flap(&mut self, impulse: f64) {
        self.velocity = -impulse;
        self.flap_timer = FLAP_ANIM_TICKS;
    }

    pub fn top(&self) -> f64 {
        self.y - AVATAR_HEIGHT / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + AVATAR_HEIGHT / 2.0
    }

    /// True once the vertical extent has left `[0, FIELD_HEIGHT]`.
    pub fn is_out_of_bounds(&self) -> bool {
        self.top() <= 0.0 || self.bottom() >= FIELD_HEIGHT
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}
