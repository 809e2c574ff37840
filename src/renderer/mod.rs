//! Renderer-facing view of the simulation
//!
//! Drawing itself belongs to the host. This module only flattens the live
//! state into plain records a renderer can iterate without touching `sim`.

pub mod snapshot;

pub use snapshot::{Gauge, Hud, RenderSnapshot, SpriteView};
