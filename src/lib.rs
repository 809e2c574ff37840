//! Meteor Strike - a vertical arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, spawning, collisions, game state)
//! - `renderer`: Read-only snapshot of the simulation for drawing
//! - `platform`: Host session (frame callback, input handles, teardown)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::{InputHandle, Session};
pub use tuning::{Preset, Tuning};

/// Fixed simulation constants that are not exposed as tunables
pub mod consts {
    /// Boss entry height (surface units from the top edge)
    pub const BOSS_SPAWN_Y: f32 = 50.0;
    /// Minimum centre distance between freshly spawned hazards, in hazard widths
    pub const HAZARD_SEPARATION_FACTOR: f32 = 1.5;
    /// Upper bound on separation re-placements per spawned hazard
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 8;
    /// Longest frame gap (ms) fed to time-scaled systems like energy regen
    pub const MAX_FRAME_GAP_MS: f64 = 100.0;
}
