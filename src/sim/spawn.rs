//! Spawn timing, placement and the difficulty ramp
//!
//! Three wall-clock timers run independently: hazard spawn opportunities
//! (whose interval decays toward a floor), the global difficulty ramp (which
//! shrinks the same interval further), and pickup opportunities. The boss is
//! not on a timer; it is summoned from the destroyed-hazard counter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::entity::{Entity, EntityIds, Surface};
use super::rng::RandomSource;
use crate::consts::{HAZARD_SEPARATION_FACTOR, MAX_PLACEMENT_ATTEMPTS};
use crate::tuning::{HazardTuning, PickupTuning, Tuning};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Current gap between hazard spawn opportunities
    pub hazard_interval_ms: f64,
    pub last_hazard_at: f64,
    pub last_difficulty_at: f64,
    pub last_pickup_at: f64,
    /// Hazards destroyed by projectiles (escapes and rams do not count)
    pub destroyed: u32,
    pub next_boss_threshold: u32,
}

impl SpawnDirector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            hazard_interval_ms: tuning.hazard.initial_spawn_interval_ms,
            last_hazard_at: 0.0,
            last_difficulty_at: 0.0,
            last_pickup_at: 0.0,
            destroyed: 0,
            next_boss_threshold: tuning.boss.appearance_threshold,
        }
    }

    /// Run a hazard spawn opportunity if the interval has elapsed.
    ///
    /// The timer resets and the interval decays on every opportunity, even
    /// when the roll fails or the field is full. Returns how many spawned.
    pub fn spawn_hazards(
        &mut self,
        now: f64,
        surface: Surface,
        tuning: &HazardTuning,
        hazards: &mut Vec<Entity>,
        ids: &mut EntityIds,
        rng: &mut impl RandomSource,
    ) -> usize {
        if now - self.last_hazard_at <= self.hazard_interval_ms {
            return 0;
        }
        self.last_hazard_at = now;

        let mut spawned = 0;
        if rng.next_unit() < tuning.spawn_chance && hazards.len() < tuning.max_live {
            let room = tuning.max_live - hazards.len();
            let count = (rng.next_count(tuning.max_simultaneous_spawn) as usize).min(room);
            let size = Vec2::new(tuning.width, tuning.height);

            for _ in 0..count {
                let x = rng.next_below(surface.width - size.x);
                let x = place_apart(x, 0.0, size.x, surface, hazards);
                hazards.push(Entity::hazard(
                    ids.next_id(),
                    Vec2::new(x, 0.0),
                    size,
                    tuning.speed,
                    tuning.max_hit_points,
                ));
                spawned += 1;
            }
            log::debug!(
                "Spawned {} hazards ({} live, interval {:.0}ms)",
                spawned,
                hazards.len(),
                self.hazard_interval_ms
            );
        }

        self.hazard_interval_ms =
            (self.hazard_interval_ms * tuning.spawn_interval_decay).max(tuning.min_spawn_interval_ms);
        spawned
    }

    /// Apply the global difficulty ramp. Returns the new interval when it ran.
    pub fn escalate(&mut self, now: f64, tuning: &Tuning) -> Option<f64> {
        if now - self.last_difficulty_at <= tuning.difficulty.interval_ms {
            return None;
        }
        self.last_difficulty_at = now;
        self.hazard_interval_ms = (self.hazard_interval_ms * tuning.difficulty.factor)
            .max(tuning.hazard.min_spawn_interval_ms);
        log::info!(
            "Difficulty raised: hazard interval now {:.0}ms",
            self.hazard_interval_ms
        );
        Some(self.hazard_interval_ms)
    }

    /// Run a pickup spawn opportunity if the interval has elapsed
    pub fn spawn_pickup(
        &mut self,
        now: f64,
        surface: Surface,
        tuning: &PickupTuning,
        pickups: &mut Vec<Entity>,
        ids: &mut EntityIds,
        rng: &mut impl RandomSource,
    ) -> bool {
        if now - self.last_pickup_at <= tuning.spawn_interval_ms {
            return false;
        }
        self.last_pickup_at = now;

        if rng.next_unit() >= tuning.spawn_chance {
            return false;
        }
        let size = Vec2::new(tuning.width, tuning.height);
        let x = rng.next_below(surface.width - size.x);
        pickups.push(Entity::pickup(
            ids.next_id(),
            Vec2::new(x, 0.0),
            size,
            tuning.speed,
        ));
        true
    }

    /// Count a destroyed hazard and summon the boss once the threshold is
    /// reached with no boss on the field. Returns the new boss id.
    pub fn record_destroyed(
        &mut self,
        boss: &mut Option<Boss>,
        tuning: &Tuning,
        surface: Surface,
        ids: &mut EntityIds,
    ) -> Option<u32> {
        self.destroyed += 1;
        if self.destroyed < self.next_boss_threshold || boss.is_some() {
            return None;
        }

        let spawned = Boss::new(ids.next_id(), &tuning.boss, &tuning.projectile, surface);
        let id = spawned.id;
        *boss = Some(spawned);
        self.next_boss_threshold += tuning.boss.threshold_increment;
        log::info!(
            "Boss {} appears after {} kills (next at {})",
            id,
            self.destroyed,
            self.next_boss_threshold
        );
        Some(id)
    }
}

/// Shift a new hazard's x until it clears `1.5 x width` from every other
/// hazard. Each retry jumps half a surface to the right (wrapping). After
/// `MAX_PLACEMENT_ATTEMPTS` the last candidate is kept as-is.
pub fn place_apart(x: f32, y: f32, width: f32, surface: Surface, others: &[Entity]) -> f32 {
    if surface.width <= 0.0 {
        return x;
    }
    let min_distance = HAZARD_SEPARATION_FACTOR * width;
    let max_x = (surface.width - width).max(0.0);

    let mut candidate = x.clamp(0.0, max_x);
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Vec2::new(candidate, y);
        if others
            .iter()
            .all(|o| o.body.pos.distance(pos) >= min_distance)
        {
            return candidate;
        }
        candidate = ((candidate + surface.width / 2.0) % surface.width).min(max_x);
    }

    log::warn!(
        "Hazard placement gave up after {} attempts at x={:.1}",
        MAX_PLACEMENT_ATTEMPTS,
        candidate
    );
    candidate
}
