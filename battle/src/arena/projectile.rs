//! Projectiles in flight

use crate::types::Type;

/// Damage a projectile carries when none is given
pub const DEFAULT_PROJECTILE_DAMAGE: u32 = 10;

/// A shot travelling across the board in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Base damage before type effectiveness
    pub damage: u32,
    pub attack_type: Type,
    /// Board row the shot travels along
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl Projectile {
    /// A stationary projectile at (x, y)
    pub fn new(x: f32, y: f32, row: usize, attack_type: Type) -> Self {
        Self {
            damage: DEFAULT_PROJECTILE_DAMAGE,
            attack_type,
            row,
            x,
            y,
            velocity_x: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// Set velocity in pixels per second
    pub fn fire(&mut self, velocity_x: f32, velocity_y: f32) {
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
    }

    /// Move along the current velocity
    pub fn advance(&mut self, dt_ms: u32) {
        let dt = dt_ms as f32 / 1000.0;
        self.x += self.velocity_x * dt;
        self.y += self.velocity_y * dt;
    }
}
