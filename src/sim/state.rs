//! Game state and per-frame bookkeeping
//!
//! Everything the simulation mutates lives in `GameState`; a tick borrows it
//! mutably and nothing else holds references into it.

use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::entity::{Entity, EntityIds, Surface};
use super::player::Player;
use super::spawn::SpawnDirector;
use crate::tuning::Tuning;

/// Notable things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile brought a hazard to zero hit points
    HazardDestroyed { id: u32, x: f32, y: f32 },
    /// A hazard fell past the bottom edge
    HazardEscaped { id: u32 },
    /// A hazard rammed the ship (removed whether or not damage landed)
    HazardRammed { id: u32 },
    /// Damage actually landed on the ship
    PlayerHit { damage: u32, hit_points: u32 },
    PickupCollected { id: u32, energy: f32 },
    BossSpawned { id: u32 },
    BossDamaged { id: u32, hit_points: u32 },
    BossDefeated { id: u32 },
    /// Hazard spawn interval shrank from the global ramp
    DifficultyRaised { interval_ms: f64 },
}

/// Cumulative run counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub frames: u64,
    pub shots_fired: u64,
    pub hazards_spawned: u64,
    pub hazards_escaped: u64,
    pub pickups_collected: u64,
    pub bosses_spawned: u32,
    pub bosses_defeated: u32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Player,
    /// Present only during an encounter
    pub boss: Option<Boss>,
    /// Live asteroids
    pub hazards: Vec<Entity>,
    /// Live energy asteroids
    pub pickups: Vec<Entity>,
    pub director: SpawnDirector,
    pub stats: Stats,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub ids: EntityIds,
    /// Timestamp of the previous tick (ms)
    pub last_tick_at: Option<f64>,
}

impl GameState {
    pub fn new(tuning: Tuning, surface: Surface) -> Self {
        let player = Player::new(&tuning.ship, &tuning.projectile, surface);
        let director = SpawnDirector::new(&tuning);
        Self {
            tuning,
            player,
            boss: None,
            hazards: Vec::new(),
            pickups: Vec::new(),
            director,
            stats: Stats::default(),
            events: Vec::new(),
            ids: EntityIds::default(),
            last_tick_at: None,
        }
    }

    /// Hazards destroyed by projectiles so far
    pub fn destroyed_count(&self) -> u32 {
        self.director.destroyed
    }

    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.next_id()
    }
}
