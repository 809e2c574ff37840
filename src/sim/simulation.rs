//! Owned simulation driver
//!
//! Bundles the game state with its random source and the current surface size
//! so a host only has to forward frame timestamps and input.

use rand_pcg::Pcg32;

use super::entity::Surface;
use super::player::Nudge;
use super::rng::{RandomSource, seeded};
use super::state::{GameEvent, GameState};
use super::tick::tick;
use crate::renderer::RenderSnapshot;
use crate::tuning::Tuning;

pub struct Simulation<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
    surface: Surface,
}

impl Simulation<Pcg32> {
    /// Simulation driven by a seeded PCG stream
    pub fn new(tuning: Tuning, surface: Surface, seed: u64) -> Self {
        Self::with_rng(tuning, surface, seeded(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn with_rng(tuning: Tuning, surface: Surface, rng: R) -> Self {
        log::info!(
            "Simulation starting on {}x{} surface",
            surface.width,
            surface.height
        );
        Self {
            state: GameState::new(tuning, surface),
            rng,
            surface,
        }
    }

    /// Advance one display frame
    pub fn tick(&mut self, now: f64) -> &[GameEvent] {
        tick(&mut self.state, &mut self.rng, self.surface, now);
        &self.state.events
    }

    /// Host resized the drawing surface; the ship is pulled back inside
    pub fn set_surface(&mut self, surface: Surface) {
        if surface != self.surface {
            log::debug!("Surface resized to {}x{}", surface.width, surface.height);
        }
        self.surface = surface;
        self.state.player.body.clamp_to(surface);
    }

    pub fn set_target_position(&mut self, x: f32, y: f32) {
        self.state.player.set_target_position(x, y, self.surface);
    }

    pub fn nudge(&mut self, nudge: Nudge) {
        self.state.player.nudge(nudge, self.surface);
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.surface)
    }
}
