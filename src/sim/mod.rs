//! Frame-driven simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws or touches
//! the host; randomness comes only through `RandomSource`, so a seeded or
//! scripted source reproduces a run exactly.

pub mod boss;
pub mod collision;
pub mod entity;
pub mod player;
pub mod rng;
pub mod simulation;
pub mod spawn;
pub mod state;
pub mod tick;

pub use boss::{Boss, Patrol};
pub use collision::{check_collision, resolve_collisions};
pub use entity::{Body, Direction, Entity, EntityIds, EntityKind, Sprite, Surface};
pub use player::{Nudge, Player};
pub use rng::{RandomSource, SequenceRandom, seeded};
pub use simulation::Simulation;
pub use spawn::{SpawnDirector, place_apart};
pub use state::{GameEvent, GameState, Stats};
pub use tick::tick;
