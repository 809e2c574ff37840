//! Game balance knobs
//!
//! Every tunable the simulation reads lives here. Values are plain numbers so
//! a tuning file is just JSON; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Easy => "Easy",
            Preset::Normal => "Normal",
            Preset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Preset::Easy),
            "normal" | "medium" => Some(Preset::Normal),
            "hard" => Some(Preset::Hard),
            _ => None,
        }
    }

    /// Multiplier on the hazard spawn roll
    fn spawn_chance_scale(&self) -> f32 {
        match self {
            Preset::Easy => 0.7,
            Preset::Normal => 1.0,
            Preset::Hard => 1.3,
        }
    }

    /// Multiplier on the starting hazard interval
    fn interval_scale(&self) -> f64 {
        match self {
            Preset::Easy => 1.4,
            Preset::Normal => 1.0,
            Preset::Hard => 0.7,
        }
    }

    /// Per-escalation interval factor
    fn difficulty_factor(&self) -> f64 {
        match self {
            Preset::Easy => 0.95,
            Preset::Normal => 0.9,
            Preset::Hard => 0.85,
        }
    }

    /// Multiplier on damage dealt to the ship
    fn damage_scale(&self) -> f32 {
        match self {
            Preset::Easy => 0.5,
            Preset::Normal => 1.0,
            Preset::Hard => 1.5,
        }
    }
}

/// Player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub width: f32,
    pub height: f32,
    /// Nudge distance for discrete directional input
    pub speed: f32,
    pub shot_cooldown_ms: f64,
    /// Damage each ship projectile deals
    pub damage: u32,
    pub max_hit_points: u32,
    pub max_energy: f32,
    pub energy_per_shot: f32,
    pub energy_regen_per_sec: f32,
    /// Energy granted when a projectile destroys a hazard
    pub energy_gain_per_asteroid: f32,
    pub invulnerability_ms: f64,
    /// Base gap between pointer and ship for touch control
    pub pointer_offset: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            speed: 5.0,
            shot_cooldown_ms: 200.0,
            damage: 1,
            max_hit_points: 100,
            max_energy: 100.0,
            energy_per_shot: 2.0,
            energy_regen_per_sec: 10.0,
            energy_gain_per_asteroid: 5.0,
            invulnerability_ms: 1000.0,
            pointer_offset: 60.0,
        }
    }
}

/// Falling asteroids
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub max_hit_points: i32,
    /// Live hazard cap; spawn opportunities at or above it are skipped
    pub max_live: usize,
    pub max_simultaneous_spawn: u32,
    pub spawn_chance: f32,
    pub initial_spawn_interval_ms: f64,
    pub min_spawn_interval_ms: f64,
    /// Interval multiplier applied after every spawn opportunity
    pub spawn_interval_decay: f64,
    /// Damage to the ship on contact
    pub collision_damage: u32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 30.0,
            speed: 2.0,
            max_hit_points: 3,
            max_live: 10,
            max_simultaneous_spawn: 3,
            spawn_chance: 0.7,
            initial_spawn_interval_ms: 2000.0,
            min_spawn_interval_ms: 400.0,
            spawn_interval_decay: 0.98,
            collision_damage: 10,
        }
    }
}

/// Boss encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal patrol speed
    pub speed: f32,
    pub max_hit_points: u32,
    pub shot_cooldown_ms: f64,
    /// Destroyed-hazard count that summons the first boss
    pub appearance_threshold: u32,
    /// Added to the threshold each time a boss appears
    pub threshold_increment: u32,
    /// Damage each boss projectile deals to the ship
    pub projectile_damage: u32,
    pub projectile_speed: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 80.0,
            speed: 2.0,
            max_hit_points: 50,
            shot_cooldown_ms: 1000.0,
            appearance_threshold: 10,
            threshold_increment: 10,
            projectile_damage: 15,
            projectile_speed: 4.0,
        }
    }
}

/// Ship projectiles (boss projectiles share the size)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 10.0,
            speed: 5.0,
        }
    }
}

/// Energy asteroids
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupTuning {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub spawn_interval_ms: f64,
    pub spawn_chance: f32,
    pub energy_bonus: f32,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 30.0,
            speed: 1.5,
            spawn_interval_ms: 5000.0,
            spawn_chance: 0.5,
            energy_bonus: 20.0,
        }
    }
}

/// Global difficulty ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    /// Hazard interval multiplier applied every escalation
    pub factor: f64,
    pub interval_ms: f64,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            factor: 0.9,
            interval_ms: 30_000.0,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub hazard: HazardTuning,
    pub boss: BossTuning,
    pub projectile: ProjectileTuning,
    pub pickup: PickupTuning,
    pub difficulty: DifficultyTuning,
}

impl Tuning {
    /// Defaults with a difficulty preset applied
    pub fn from_preset(preset: Preset) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(preset);
        tuning
    }

    /// Scale spawn pressure and incoming damage for a preset
    pub fn apply_preset(&mut self, preset: Preset) {
        let base_hazard = HazardTuning::default();
        let base_boss = BossTuning::default();

        self.hazard.spawn_chance =
            (base_hazard.spawn_chance * preset.spawn_chance_scale()).min(1.0);
        self.hazard.initial_spawn_interval_ms =
            base_hazard.initial_spawn_interval_ms * preset.interval_scale();
        self.hazard.collision_damage = scale_damage(base_hazard.collision_damage, preset);
        self.boss.projectile_damage = scale_damage(base_boss.projectile_damage, preset);
        self.difficulty.factor = preset.difficulty_factor();
    }

    /// Parse a tuning sheet; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace degenerate values that would break the simulation invariants
    /// (zero-sized boxes, non-positive intervals, factors outside (0, 1]).
    pub fn sanitized(mut self) -> Self {
        let ship = ShipTuning::default();
        let hazard = HazardTuning::default();
        let boss = BossTuning::default();
        let projectile = ProjectileTuning::default();
        let pickup = PickupTuning::default();
        let difficulty = DifficultyTuning::default();

        positive(&mut self.ship.width, ship.width);
        positive(&mut self.ship.height, ship.height);
        positive(&mut self.ship.max_energy, ship.max_energy);
        positive(&mut self.hazard.width, hazard.width);
        positive(&mut self.hazard.height, hazard.height);
        positive(&mut self.boss.width, boss.width);
        positive(&mut self.boss.height, boss.height);
        positive(&mut self.projectile.width, projectile.width);
        positive(&mut self.projectile.height, projectile.height);
        positive(&mut self.pickup.width, pickup.width);
        positive(&mut self.pickup.height, pickup.height);

        // Zero or negative speeds never leave the surface
        positive(&mut self.ship.speed, ship.speed);
        positive(&mut self.hazard.speed, hazard.speed);
        positive(&mut self.boss.speed, boss.speed);
        positive(&mut self.boss.projectile_speed, boss.projectile_speed);
        positive(&mut self.projectile.speed, projectile.speed);
        positive(&mut self.pickup.speed, pickup.speed);

        non_negative(&mut self.ship.energy_per_shot, ship.energy_per_shot);
        non_negative(&mut self.ship.energy_regen_per_sec, ship.energy_regen_per_sec);
        non_negative(
            &mut self.ship.energy_gain_per_asteroid,
            ship.energy_gain_per_asteroid,
        );
        non_negative(&mut self.pickup.energy_bonus, pickup.energy_bonus);

        if self.ship.max_hit_points == 0 {
            self.ship.max_hit_points = ship.max_hit_points;
        }
        if self.hazard.max_hit_points <= 0 {
            self.hazard.max_hit_points = hazard.max_hit_points;
        }
        if self.boss.max_hit_points == 0 {
            self.boss.max_hit_points = boss.max_hit_points;
        }
        if self.hazard.max_simultaneous_spawn == 0 {
            self.hazard.max_simultaneous_spawn = 1;
        }
        if self.hazard.min_spawn_interval_ms <= 0.0 {
            self.hazard.min_spawn_interval_ms = hazard.min_spawn_interval_ms;
        }
        if self.hazard.initial_spawn_interval_ms < self.hazard.min_spawn_interval_ms {
            self.hazard.initial_spawn_interval_ms = self.hazard.min_spawn_interval_ms;
        }
        unit_factor(&mut self.hazard.spawn_interval_decay, hazard.spawn_interval_decay);
        unit_factor(&mut self.difficulty.factor, difficulty.factor);
        if self.difficulty.interval_ms <= 0.0 {
            self.difficulty.interval_ms = difficulty.interval_ms;
        }
        if self.pickup.spawn_interval_ms <= 0.0 {
            self.pickup.spawn_interval_ms = pickup.spawn_interval_ms;
        }
        if self.boss.threshold_increment == 0 {
            self.boss.threshold_increment = boss.threshold_increment;
        }

        self
    }

    /// Load a tuning file, falling back to defaults on any failure
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn scale_damage(base: u32, preset: Preset) -> u32 {
    (base as f32 * preset.damage_scale()).round() as u32
}

fn positive(value: &mut f32, fallback: f32) {
    if value.is_nan() || *value <= 0.0 {
        *value = fallback;
    }
}

fn non_negative(value: &mut f32, fallback: f32) {
    if value.is_nan() || *value < 0.0 {
        *value = fallback;
    }
}

fn unit_factor(value: &mut f64, fallback: f64) {
    if value.is_nan() || *value <= 0.0 || *value > 1.0 {
        *value = fallback;
    }
}
