//! Shared spatial record and the simple entity kinds
//!
//! Every simulated object has a `Body` (top-left position, size, speed and a
//! sprite handle). Projectiles, hazards and pickups differ only by a kind tag;
//! the ship and boss embed a `Body` in their own structs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Drawing surface size, supplied by the host every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Opaque visual handle, resolved to an image by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Ship,
    Bullet,
    BossBullet,
    Meteor,
    EnergyMeteor,
    Boss,
}

/// Vertical travel direction for projectiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the y step (-1 up, +1 down)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Monotonic entity id allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Axis-aligned box with movement speed (units per frame)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub sprite: Sprite,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, sprite: Sprite) -> Self {
        Self {
            pos,
            size,
            speed,
            sprite,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal centre
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Strict AABB overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Clamp the whole box onto the surface
    pub fn clamp_to(&mut self, surface: Surface) {
        self.pos.x = self.pos.x.clamp(0.0, (surface.width - self.size.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (surface.height - self.size.y).max(0.0));
    }
}

/// Kind-specific state of a simple entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityKind {
    Projectile { direction: Direction },
    /// Asteroid; hit points may dip below zero before removal
    Hazard { hit_points: i32 },
    /// Energy asteroid
    Pickup,
}

/// A projectile, hazard or pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    pub fn projectile(id: u32, pos: Vec2, size: Vec2, speed: f32, direction: Direction) -> Self {
        let sprite = match direction {
            Direction::Up => Sprite::Bullet,
            Direction::Down => Sprite::BossBullet,
        };
        Self {
            id,
            body: Body::new(pos, size, speed, sprite),
            kind: EntityKind::Projectile { direction },
        }
    }

    pub fn hazard(id: u32, pos: Vec2, size: Vec2, speed: f32, hit_points: i32) -> Self {
        Self {
            id,
            body: Body::new(pos, size, speed, Sprite::Meteor),
            kind: EntityKind::Hazard { hit_points },
        }
    }

    pub fn pickup(id: u32, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            id,
            body: Body::new(pos, size, speed, Sprite::EnergyMeteor),
            kind: EntityKind::Pickup,
        }
    }

    /// Move one frame along the kind's travel axis
    pub fn advance(&mut self) {
        let step = match self.kind {
            EntityKind::Projectile { direction } => direction.sign() * self.body.speed,
            EntityKind::Hazard { .. } | EntityKind::Pickup => self.body.speed,
        };
        self.body.pos.y += step;
    }

    /// Left the vertical play area
    pub fn is_out_of_bounds(&self, surface_height: f32) -> bool {
        match self.kind {
            EntityKind::Projectile {
                direction: Direction::Up,
            } => self.body.pos.y < 0.0,
            EntityKind::Projectile {
                direction: Direction::Down,
            }
            | EntityKind::Hazard { .. }
            | EntityKind::Pickup => self.body.pos.y > surface_height,
        }
    }

    /// Subtract hit points (hazards only). Returns true once destroyed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        match &mut self.kind {
            EntityKind::Hazard { hit_points } => {
                *hit_points = hit_points.saturating_sub(i32::try_from(amount).unwrap_or(i32::MAX));
                *hit_points <= 0
            }
            _ => false,
        }
    }

    pub fn hit_points(&self) -> Option<i32> {
        match self.kind {
            EntityKind::Hazard { hit_points } => Some(hit_points),
            _ => None,
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.body.overlaps(other)
    }
}
