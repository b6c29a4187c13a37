//! Components of the demo scene.

use tessera_core::render::Color;
use ultraviolet::Vec2;

/// Radius of circles drawn for sprites by default.
pub const DEFAULT_RADIUS: f32 = 10.0;

/// Position of the entity in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Velocity of the entity in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Visual attribute: entity is drawn as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub color: Color,
    pub radius: f32,
}

impl Sprite {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            radius: DEFAULT_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Count of frames after which the entity is removed from the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime {
    pub frames_left: u32,
}
