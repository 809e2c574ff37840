//! Host session layer
//!
//! The host owns one `Session` and calls `frame` from its display callback.
//! Input listeners get `InputHandle`s that only hold weak references, so once
//! the session is torn down every later frame or input call is a no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand_pcg::Pcg32;

use crate::renderer::RenderSnapshot;
use crate::sim::{Nudge, RandomSource, Simulation, Surface};
use crate::tuning::Tuning;

pub struct Session<R: RandomSource = Pcg32> {
    sim: Option<Rc<RefCell<Simulation<R>>>>,
}

impl Session<Pcg32> {
    pub fn new(tuning: Tuning, surface: Surface, seed: u64) -> Self {
        Self::from_simulation(Simulation::new(tuning, surface, seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn from_simulation(sim: Simulation<R>) -> Self {
        Self {
            sim: Some(Rc::new(RefCell::new(sim))),
        }
    }

    /// Run one frame. Returns false once torn down; the host should stop
    /// re-arming its frame callback.
    pub fn frame(&self, now: f64) -> bool {
        let Some(sim) = &self.sim else {
            return false;
        };
        sim.borrow_mut().tick(now);
        true
    }

    /// New handle for an input listener
    pub fn input(&self) -> InputHandle<R> {
        InputHandle {
            sim: self.sim.as_ref().map(Rc::downgrade).unwrap_or_default(),
        }
    }

    pub fn snapshot(&self) -> Option<RenderSnapshot> {
        self.sim.as_ref().map(|sim| sim.borrow().snapshot())
    }

    /// Borrow the simulation for inspection
    pub fn with_simulation<T>(&self, f: impl FnOnce(&Simulation<R>) -> T) -> Option<T> {
        self.sim.as_ref().map(|sim| f(&sim.borrow()))
    }

    pub fn is_active(&self) -> bool {
        self.sim.is_some()
    }

    /// Stop the session. Outstanding input handles go inert.
    pub fn teardown(&mut self) {
        if self.sim.take().is_some() {
            log::info!("Session torn down");
        }
    }
}

/// Input entry points handed to host listeners
pub struct InputHandle<R: RandomSource = Pcg32> {
    sim: Weak<RefCell<Simulation<R>>>,
}

impl<R: RandomSource> Clone for InputHandle<R> {
    fn clone(&self) -> Self {
        Self {
            sim: self.sim.clone(),
        }
    }
}

impl<R: RandomSource> InputHandle<R> {
    /// Apply an input to a live simulation. Returns false when dropped.
    fn apply(&self, f: impl FnOnce(&mut Simulation<R>)) -> bool {
        let Some(sim) = self.sim.upgrade() else {
            return false;
        };
        match sim.try_borrow_mut() {
            Ok(mut sim) => {
                f(&mut sim);
                true
            }
            Err(_) => {
                log::warn!("Input arrived during a frame, dropped");
                false
            }
        }
    }

    /// Pointer or touch sample on a `width` x `height` surface.
    ///
    /// Each sample carries the host's current surface size and the
    /// simulation adopts it before targeting, the same as `resize`.
    pub fn set_target_position(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.apply(|sim| {
            sim.set_surface(Surface::new(width, height));
            sim.set_target_position(x, y);
        })
    }

    pub fn nudge(&self, nudge: Nudge) -> bool {
        self.apply(|sim| sim.nudge(nudge))
    }

    pub fn move_left(&self) -> bool {
        self.nudge(Nudge::Left)
    }

    pub fn move_right(&self) -> bool {
        self.nudge(Nudge::Right)
    }

    pub fn move_up(&self) -> bool {
        self.nudge(Nudge::Up)
    }

    pub fn move_down(&self) -> bool {
        self.nudge(Nudge::Down)
    }

    pub fn resize(&self, width: f32, height: f32) -> bool {
        self.apply(|sim| sim.set_surface(Surface::new(width, height)))
    }

    pub fn is_live(&self) -> bool {
        self.sim.strong_count() > 0
    }
}
