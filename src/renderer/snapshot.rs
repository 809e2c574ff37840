//! Per-frame render snapshot

use serde::{Deserialize, Serialize};

use crate::sim::{Body, Entity, GameState, Sprite, Surface};

/// Width of the health bar drawn above the ship (surface units)
pub const SHIP_BAR_WIDTH: f32 = 50.0;
pub const SHIP_BAR_HEIGHT: f32 = 5.0;
/// Gap between the health bar and the ship's top edge
pub const SHIP_BAR_GAP: f32 = 5.0;

/// One drawable box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: Sprite,
    /// Hit points for damageable things, energy for the ship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
}

impl SpriteView {
    fn from_body(id: u32, body: &Body, value: Option<f32>) -> Self {
        Self {
            id,
            x: body.pos.x,
            y: body.pos.y,
            width: body.size.x,
            height: body.size.y,
            sprite: body.sprite,
            value,
        }
    }

    fn from_entity(entity: &Entity) -> Self {
        Self::from_body(
            entity.id,
            &entity.body,
            entity.hit_points().map(|hp| hp as f32),
        )
    }
}

/// A value drawn as a partially filled bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub value: f32,
    pub max: f32,
}

impl Gauge {
    pub fn new(value: f32, max: f32) -> Self {
        Self { value, max }
    }

    /// Filled share of the bar in [0, 1]; an empty range reads as empty
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }

    /// Width of the filled part of a bar `bar_width` wide
    pub fn fill_width(&self, bar_width: f32) -> f32 {
        self.ratio() * bar_width
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    /// Hazards destroyed by projectiles
    pub destroyed: u32,
    pub next_boss_at: u32,
    pub health: Gauge,
    pub energy: Gauge,
    /// Present only during a boss encounter
    pub boss_health: Option<Gauge>,
}

/// Everything a renderer needs for one frame, in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub width: f32,
    pub height: f32,
    pub ship: SpriteView,
    pub projectiles: Vec<SpriteView>,
    pub hazards: Vec<SpriteView>,
    pub pickups: Vec<SpriteView>,
    pub boss: Option<SpriteView>,
    pub boss_projectiles: Vec<SpriteView>,
    pub hud: Hud,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, surface: Surface) -> Self {
        let player = &state.player;
        let boss = state.boss.as_ref();

        Self {
            width: surface.width,
            height: surface.height,
            ship: SpriteView::from_body(0, &player.body, Some(player.energy)),
            projectiles: player.projectiles.iter().map(SpriteView::from_entity).collect(),
            hazards: state.hazards.iter().map(SpriteView::from_entity).collect(),
            pickups: state.pickups.iter().map(SpriteView::from_entity).collect(),
            boss: boss.map(|b| SpriteView::from_body(b.id, &b.body, Some(b.hit_points as f32))),
            boss_projectiles: boss
                .map(|b| b.projectiles.iter().map(SpriteView::from_entity).collect())
                .unwrap_or_default(),
            hud: Hud {
                destroyed: state.destroyed_count(),
                next_boss_at: state.director.next_boss_threshold,
                health: Gauge::new(player.hit_points as f32, player.max_hit_points as f32),
                energy: Gauge::new(player.energy, player.max_energy),
                boss_health: boss.map(|b| Gauge::new(b.hit_points as f32, b.max_hit_points as f32)),
            },
        }
    }

    /// Background and filled rects `(x, y, w, h)` of the ship health bar
    pub fn ship_health_bar(&self) -> ([f32; 4], [f32; 4]) {
        let x = self.ship.x;
        let y = self.ship.y - SHIP_BAR_GAP - SHIP_BAR_HEIGHT;
        let fill = self.hud.health.fill_width(SHIP_BAR_WIDTH);
        (
            [x, y, SHIP_BAR_WIDTH, SHIP_BAR_HEIGHT],
            [x, y, fill, SHIP_BAR_HEIGHT],
        )
    }

    /// Number of sprites the renderer will draw
    pub fn sprite_count(&self) -> usize {
        1 + self.projectiles.len()
            + self.hazards.len()
            + self.pickups.len()
            + usize::from(self.boss.is_some())
            + self.boss_projectiles.len()
    }
}
