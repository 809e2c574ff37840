//! The player ship: movement, auto-fire, health and the energy economy

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Direction, Entity, EntityIds, Sprite, Surface};
use crate::tuning::{ProjectileTuning, ShipTuning};

/// Gap between the ship's bottom edge and the surface bottom at spawn
const SPAWN_BOTTOM_MARGIN: f32 = 20.0;

/// Discrete directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    Left,
    Right,
    Up,
    Down,
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub energy: f32,
    pub max_energy: f32,
    pub energy_per_shot: f32,
    pub energy_regen_per_sec: f32,
    pub shot_cooldown_ms: f64,
    pub invulnerability_ms: f64,
    /// Damage each projectile deals
    pub damage: u32,
    pub pointer_offset: f32,
    /// Live projectiles in firing order
    pub projectiles: Vec<Entity>,
    projectile_size: Vec2,
    projectile_speed: f32,
    last_shot_at: Option<f64>,
    last_hit_at: Option<f64>,
}

impl Player {
    /// Ship centred horizontally near the bottom edge, full health and energy
    pub fn new(ship: &ShipTuning, projectile: &ProjectileTuning, surface: Surface) -> Self {
        let size = Vec2::new(ship.width, ship.height);
        let pos = Vec2::new(
            surface.width / 2.0 - size.x / 2.0,
            surface.height - size.y - SPAWN_BOTTOM_MARGIN,
        );
        let mut body = Body::new(pos, size, ship.speed, Sprite::Ship);
        body.clamp_to(surface);

        Self {
            body,
            hit_points: ship.max_hit_points,
            max_hit_points: ship.max_hit_points,
            energy: ship.max_energy,
            max_energy: ship.max_energy,
            energy_per_shot: ship.energy_per_shot,
            energy_regen_per_sec: ship.energy_regen_per_sec,
            shot_cooldown_ms: ship.shot_cooldown_ms,
            invulnerability_ms: ship.invulnerability_ms,
            damage: ship.damage,
            pointer_offset: ship.pointer_offset,
            projectiles: Vec::new(),
            projectile_size: Vec2::new(projectile.width, projectile.height),
            projectile_speed: projectile.speed,
            last_shot_at: None,
            last_hit_at: None,
        }
    }

    /// Move toward a pointer/touch sample.
    ///
    /// The ship is centred on `x` and held above the finger: the gap grows
    /// from `pointer_offset` at the top edge to twice that at the bottom, so
    /// the ship stays visible while the thumb is low on the screen.
    pub fn set_target_position(&mut self, x: f32, y: f32, surface: Surface) {
        let factor = 1.0 + y / surface.height;
        let offset = self.pointer_offset * factor;
        self.body.pos = Vec2::new(x - self.body.size.x / 2.0, y - self.body.size.y - offset);
        self.body.clamp_to(surface);
    }

    /// Step one `speed` along an axis
    pub fn nudge(&mut self, nudge: Nudge, surface: Surface) {
        let step = self.body.speed;
        match nudge {
            Nudge::Left => self.body.pos.x -= step,
            Nudge::Right => self.body.pos.x += step,
            Nudge::Up => self.body.pos.y -= step,
            Nudge::Down => self.body.pos.y += step,
        }
        self.body.clamp_to(surface);
    }

    /// Fire if the cooldown has elapsed and energy covers the shot
    pub fn fire(&mut self, now: f64, ids: &mut EntityIds) -> bool {
        if self
            .last_shot_at
            .is_some_and(|last| now - last <= self.shot_cooldown_ms)
        {
            return false;
        }
        if self.energy < self.energy_per_shot {
            return false;
        }

        let pos = Vec2::new(
            self.body.center_x() - self.projectile_size.x / 2.0,
            self.body.pos.y,
        );
        self.projectiles.push(Entity::projectile(
            ids.next_id(),
            pos,
            self.projectile_size,
            self.projectile_speed,
            Direction::Up,
        ));
        self.energy = (self.energy - self.energy_per_shot).clamp(0.0, self.max_energy);
        self.last_shot_at = Some(now);
        true
    }

    pub fn regenerate_energy(&mut self, elapsed_ms: f64) {
        let gain = self.energy_regen_per_sec * (elapsed_ms / 1000.0) as f32;
        self.gain_energy(gain);
    }

    /// Add energy, capped at the maximum
    pub fn gain_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount.max(0.0)).min(self.max_energy);
    }

    /// Deduct energy if enough is available
    pub fn spend_energy(&mut self, amount: f32) -> bool {
        if self.energy < amount {
            return false;
        }
        self.energy = (self.energy - amount).clamp(0.0, self.max_energy);
        true
    }

    /// Apply damage unless still invulnerable from the previous hit
    pub fn apply_damage(&mut self, amount: u32, now: f64) -> bool {
        if self.is_invulnerable(now) {
            return false;
        }
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.last_hit_at = Some(now);
        true
    }

    pub fn is_invulnerable(&self, now: f64) -> bool {
        self.last_hit_at
            .is_some_and(|last| now - last < self.invulnerability_ms)
    }

    /// Per-frame update: fire, cull, move projectiles, regenerate.
    /// Returns whether a shot was fired.
    pub fn advance(
        &mut self,
        now: f64,
        elapsed_ms: f64,
        surface: Surface,
        ids: &mut EntityIds,
    ) -> bool {
        let fired = self.fire(now, ids);
        self.projectiles
            .retain(|p| !p.is_out_of_bounds(surface.height));
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        self.regenerate_energy(elapsed_ms);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(800.0, 600.0)
    }

    fn ship() -> Player {
        Player::new(&ShipTuning::default(), &ProjectileTuning::default(), surface())
    }

    #[test]
    fn test_spawns_bottom_centre() {
        let p = ship();
        assert_eq!(p.body.pos, Vec2::new(375.0, 530.0));
        assert_eq!(p.hit_points, 100);
        assert_eq!(p.energy, 100.0);
    }

    #[test]
    fn test_fire_rate_gate() {
        let mut p = ship();
        let mut ids = EntityIds::default();
        let fired: Vec<bool> = [0.0, 50.0, 100.0, 150.0, 200.0, 250.0]
            .iter()
            .map(|&t| p.fire(t, &mut ids))
            .collect();
        assert_eq!(fired, vec![true, false, false, false, false, true]);
        assert_eq!(p.projectiles.len(), 2);
    }

    #[test]
    fn test_fire_needs_energy() {
        let mut p = ship();
        let mut ids = EntityIds::default();
        p.energy = 1.5;
        assert!(!p.fire(0.0, &mut ids));
        assert!(p.projectiles.is_empty());
        assert_eq!(p.energy, 1.5);

        p.energy = 2.0;
        assert!(p.fire(0.0, &mut ids));
        assert_eq!(p.energy, 0.0);
    }

    #[test]
    fn test_negative_costs_never_overfill() {
        let mut p = ship();
        let mut ids = EntityIds::default();
        p.energy_per_shot = -5.0;
        assert!(p.fire(0.0, &mut ids));
        assert_eq!(p.energy, p.max_energy);

        assert!(p.spend_energy(-5.0));
        assert_eq!(p.energy, p.max_energy);
    }

    #[test]
    fn test_projectile_leaves_from_nose() {
        let mut p = ship();
        let mut ids = EntityIds::default();
        p.fire(0.0, &mut ids);
        let shot = &p.projectiles[0];
        assert_eq!(shot.body.pos, Vec2::new(397.5, 530.0));
        assert_eq!(shot.body.size, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_regen_clamps_to_max() {
        let mut p = ship();
        p.energy = 50.0;
        p.regenerate_energy(1000.0);
        assert_eq!(p.energy, 60.0);
        p.regenerate_energy(60_000.0);
        assert_eq!(p.energy, p.max_energy);
    }

    #[test]
    fn test_invulnerability_window() {
        let mut p = ship();
        assert!(p.apply_damage(10, 0.0));
        assert_eq!(p.hit_points, 90);
        assert!(!p.apply_damage(10, 999.0));
        assert_eq!(p.hit_points, 90);
        assert!(p.apply_damage(10, 1000.0));
        assert_eq!(p.hit_points, 80);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut p = ship();
        p.apply_damage(500, 0.0);
        assert_eq!(p.hit_points, 0);
    }

    #[test]
    fn test_spend_energy_rejects_overdraw() {
        let mut p = ship();
        p.energy = 3.0;
        assert!(!p.spend_energy(4.0));
        assert_eq!(p.energy, 3.0);
        assert!(p.spend_energy(3.0));
        assert_eq!(p.energy, 0.0);
    }

    #[test]
    fn test_target_position_offsets_above_finger() {
        let mut p = ship();
        // Finger at the vertical middle: offset = 60 * 1.5 = 90
        p.set_target_position(400.0, 300.0, surface());
        assert_eq!(p.body.pos, Vec2::new(375.0, 300.0 - 50.0 - 90.0));
    }

    #[test]
    fn test_target_position_clamps() {
        let mut p = ship();
        p.set_target_position(-100.0, 10.0, surface());
        assert_eq!(p.body.pos, Vec2::new(0.0, 0.0));
        p.set_target_position(5000.0, 5000.0, surface());
        assert_eq!(p.body.pos.x, 750.0);
        assert_eq!(p.body.pos.y, 550.0);
    }

    #[test]
    fn test_nudge_moves_by_speed_and_clamps() {
        let mut p = ship();
        p.nudge(Nudge::Left, surface());
        assert_eq!(p.body.pos.x, 370.0);
        p.nudge(Nudge::Up, surface());
        assert_eq!(p.body.pos.y, 525.0);

        p.body.pos.x = 748.0;
        p.nudge(Nudge::Right, surface());
        assert_eq!(p.body.pos.x, 750.0);
    }

    #[test]
    fn test_advance_fires_then_moves_then_regens() {
        let mut p = ship();
        let mut ids = EntityIds::default();
        assert!(p.advance(0.0, 100.0, surface(), &mut ids));
        assert_eq!(p.projectiles.len(), 1);
        // Fired at y=530 then advanced once
        assert_eq!(p.projectiles[0].body.pos.y, 525.0);
        // 100 - 2 + 1
        assert_eq!(p.energy, 99.0);
    }

    #[test]
    fn test_advance_culls_projectiles_above_top() {
        let mut p = ship();
        let mut ids = EntityIds::default();
        p.fire(0.0, &mut ids);
        p.projectiles[0].body.pos.y = -1.0;
        p.advance(10.0, 16.0, surface(), &mut ids);
        assert!(p.projectiles.is_empty());
    }
}
