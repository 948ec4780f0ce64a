//! Slingshot launch gestures

use glam::Vec2;

/// A body launch: where it appears and the raw (unscaled) impulse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub position: Vec2,
    pub impulse: Vec2,
}

impl Launch {
    pub fn new(position: Vec2, impulse: Vec2) -> Self {
        Self { position, impulse }
    }

    /// Drag from `press` to `release`: the body spawns at `press` and flies
    /// away from the drag direction, like pulling back a slingshot.
    pub fn from_drag(press: Vec2, release: Vec2) -> Self {
        Self {
            position: press,
            impulse: press - release,
        }
    }
}
