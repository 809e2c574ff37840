//! Per-frame collision resolution
//!
//! All pairwise checks use strict AABB overlap. Removals are recorded as
//! tombstones so later checks in the same pass skip them, then each
//! collection is compacted once at the end.

use super::entity::{Body, Surface};
use super::state::{GameEvent, GameState};

/// Strict axis-aligned overlap between two boxes
#[inline]
pub fn check_collision(a: &Body, b: &Body) -> bool {
    a.overlaps(b)
}

/// Removal marks for one collection during a collision pass
#[derive(Debug)]
struct Tombstones {
    dead: Vec<bool>,
}

impl Tombstones {
    fn new(len: usize) -> Self {
        Self {
            dead: vec![false; len],
        }
    }

    fn kill(&mut self, index: usize) {
        self.dead[index] = true;
    }

    fn is_dead(&self, index: usize) -> bool {
        self.dead[index]
    }

    /// Drop every marked element, preserving order of the survivors
    fn compact<T>(&self, items: &mut Vec<T>) {
        let mut index = 0;
        items.retain(|_| {
            let keep = !self.dead[index];
            index += 1;
            keep
        });
    }
}

/// Resolve every interaction for this frame, in order:
/// 1. boss projectiles hitting the ship
/// 2. the ship ramming hazards
/// 3. ship projectiles hitting hazards (one hazard per projectile)
/// 4. ship projectiles hitting the boss
/// 5. the ship collecting pickups
pub fn resolve_collisions(state: &mut GameState, surface: Surface, now: f64) {
    let GameState {
        tuning,
        player,
        boss,
        hazards,
        pickups,
        director,
        stats,
        events,
        ids,
        ..
    } = state;

    // 1. Boss volley vs ship
    if let Some(b) = boss.as_mut() {
        let mut shots = Tombstones::new(b.projectiles.len());
        for i in (0..b.projectiles.len()).rev() {
            if b.projectiles[i].overlaps(&player.body) {
                shots.kill(i);
                if player.apply_damage(b.damage, now) {
                    events.push(GameEvent::PlayerHit {
                        damage: b.damage,
                        hit_points: player.hit_points,
                    });
                }
            }
        }
        shots.compact(&mut b.projectiles);
    }

    // 2. Ship vs hazards
    let mut dead_hazards = Tombstones::new(hazards.len());
    let ram_damage = tuning.hazard.collision_damage;
    for j in (0..hazards.len()).rev() {
        if hazards[j].overlaps(&player.body) {
            dead_hazards.kill(j);
            events.push(GameEvent::HazardRammed { id: hazards[j].id });
            if player.apply_damage(ram_damage, now) {
                events.push(GameEvent::PlayerHit {
                    damage: ram_damage,
                    hit_points: player.hit_points,
                });
            }
        }
    }

    // 3. Ship projectiles vs hazards
    let mut dead_shots = Tombstones::new(player.projectiles.len());
    let energy_per_shot = tuning.ship.energy_per_shot;
    for i in (0..player.projectiles.len()).rev() {
        for j in (0..hazards.len()).rev() {
            if dead_hazards.is_dead(j) || !player.projectiles[i].overlaps(&hazards[j].body) {
                continue;
            }
            dead_shots.kill(i);
            if hazards[j].take_damage(player.damage) {
                dead_hazards.kill(j);
                let rock = &hazards[j].body;
                events.push(GameEvent::HazardDestroyed {
                    id: hazards[j].id,
                    x: rock.pos.x,
                    y: rock.pos.y,
                });

                // Kill bounty: costs one more shot's energy, pays out more
                if player.spend_energy(energy_per_shot) {
                    player.gain_energy(tuning.ship.energy_gain_per_asteroid);
                }

                if let Some(id) = director.record_destroyed(boss, tuning, surface, ids) {
                    stats.bosses_spawned += 1;
                    events.push(GameEvent::BossSpawned { id });
                }
            }
            break;
        }
    }

    // 4. Ship projectiles vs boss
    for i in (0..player.projectiles.len()).rev() {
        if dead_shots.is_dead(i) {
            continue;
        }
        let Some(b) = boss.as_mut() else {
            break;
        };
        if !player.projectiles[i].overlaps(&b.body) {
            continue;
        }
        dead_shots.kill(i);
        if !player.spend_energy(energy_per_shot) {
            continue;
        }

        let id = b.id;
        if b.apply_damage(player.damage) {
            *boss = None;
            stats.bosses_defeated += 1;
            events.push(GameEvent::BossDefeated { id });
            log::info!("Boss {} defeated", id);
        } else {
            events.push(GameEvent::BossDamaged {
                id,
                hit_points: b.hit_points,
            });
        }
    }

    // 5. Ship vs pickups
    let mut dead_pickups = Tombstones::new(pickups.len());
    let bonus = tuning.pickup.energy_bonus;
    for k in (0..pickups.len()).rev() {
        if pickups[k].overlaps(&player.body) {
            dead_pickups.kill(k);
            player.gain_energy(bonus);
            stats.pickups_collected += 1;
            events.push(GameEvent::PickupCollected {
                id: pickups[k].id,
                energy: bonus,
            });
        }
    }

    dead_shots.compact(&mut player.projectiles);
    dead_hazards.compact(hazards);
    dead_pickups.compact(pickups);
}
