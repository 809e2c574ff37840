//! Boss encounter entity
//!
//! A single boss patrols horizontally near the top of the surface, bouncing
//! off the side edges, and fires a three-way volley on a fixed cooldown.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Direction, Entity, EntityIds, Sprite, Surface};
use crate::consts::BOSS_SPAWN_Y;
use crate::tuning::{BossTuning, ProjectileTuning};

/// Horizontal patrol heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Patrol {
    Left,
    Right,
}

impl Patrol {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Patrol::Left => -1.0,
            Patrol::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub id: u32,
    pub body: Body,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub patrol: Patrol,
    /// Damage each volley projectile deals to the ship
    pub damage: u32,
    pub shot_cooldown_ms: f64,
    pub projectiles: Vec<Entity>,
    projectile_size: Vec2,
    projectile_speed: f32,
    last_shot_at: Option<f64>,
}

impl Boss {
    /// Boss centred horizontally at the fixed entry height
    pub fn new(
        id: u32,
        tuning: &BossTuning,
        projectile: &ProjectileTuning,
        surface: Surface,
    ) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        let pos = Vec2::new(surface.width / 2.0 - size.x / 2.0, BOSS_SPAWN_Y);
        Self {
            id,
            body: Body::new(pos, size, tuning.speed, Sprite::Boss),
            hit_points: tuning.max_hit_points,
            max_hit_points: tuning.max_hit_points,
            patrol: Patrol::Right,
            damage: tuning.projectile_damage,
            shot_cooldown_ms: tuning.shot_cooldown_ms,
            projectiles: Vec::new(),
            projectile_size: Vec2::new(projectile.width, projectile.height),
            projectile_speed: tuning.projectile_speed,
            last_shot_at: None,
        }
    }

    /// Fire a volley from the centre and both quarter points of the hull
    pub fn fire(&mut self, now: f64, ids: &mut EntityIds) -> bool {
        if self
            .last_shot_at
            .is_some_and(|last| now - last <= self.shot_cooldown_ms)
        {
            return false;
        }

        let y = self.body.bottom();
        let left = self.body.pos.x;
        let width = self.body.size.x;
        for muzzle in [left + width / 2.0, left + width / 4.0, left + width * 0.75] {
            self.projectiles.push(Entity::projectile(
                ids.next_id(),
                Vec2::new(muzzle - self.projectile_size.x / 2.0, y),
                self.projectile_size,
                self.projectile_speed,
                Direction::Down,
            ));
        }
        self.last_shot_at = Some(now);
        true
    }

    /// Move one step along the patrol, reflecting off the side edges
    pub fn patrol(&mut self, surface: Surface) {
        self.body.pos.x += self.body.speed * self.patrol.sign();

        let max_x = (surface.width - self.body.size.x).max(0.0);
        if self.body.pos.x <= 0.0 {
            self.body.pos.x = 0.0;
            self.patrol = Patrol::Right;
        } else if self.body.pos.x >= max_x {
            self.body.pos.x = max_x;
            self.patrol = Patrol::Left;
        }
    }

    /// Per-frame update: fire, cull, move projectiles, patrol
    pub fn advance(&mut self, now: f64, surface: Surface, ids: &mut EntityIds) -> bool {
        let fired = self.fire(now, ids);
        self.projectiles
            .retain(|p| !p.is_out_of_bounds(surface.height));
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        self.patrol(surface);
        fired
    }

    /// Subtract hit points. Returns true once defeated.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.is_defeated()
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points == 0
    }
}
