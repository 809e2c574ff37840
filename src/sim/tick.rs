//! Frame-driven simulation tick
//!
//! Core game loop that advances the simulation by one display frame.

use super::collision::resolve_collisions;
use super::entity::Surface;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};
use crate::consts::MAX_FRAME_GAP_MS;

/// Advance the game state to timestamp `now` (ms, monotonic).
///
/// Order within a frame: ship, spawn timers, hazards, pickups, boss, then
/// collisions. Every advance for the frame happens before any collision.
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource, surface: Surface, now: f64) {
    state.events.clear();
    state.stats.frames += 1;

    let elapsed_ms = match state.last_tick_at {
        Some(last) => (now - last).clamp(0.0, MAX_FRAME_GAP_MS),
        None => 0.0,
    };
    state.last_tick_at = Some(now);

    // Ship: fire, cull, move projectiles, regenerate
    if state
        .player
        .advance(now, elapsed_ms, surface, &mut state.ids)
    {
        state.stats.shots_fired += 1;
    }

    // Spawn timers
    let spawned = state.director.spawn_hazards(
        now,
        surface,
        &state.tuning.hazard,
        &mut state.hazards,
        &mut state.ids,
        rng,
    );
    state.stats.hazards_spawned += spawned as u64;

    if let Some(interval_ms) = state.director.escalate(now, &state.tuning) {
        state.events.push(GameEvent::DifficultyRaised { interval_ms });
    }

    state.director.spawn_pickup(
        now,
        surface,
        &state.tuning.pickup,
        &mut state.pickups,
        &mut state.ids,
        rng,
    );

    // Hazards fall; escapes are not kills
    for hazard in &mut state.hazards {
        hazard.advance();
    }
    let events = &mut state.events;
    let stats = &mut state.stats;
    state.hazards.retain(|h| {
        if h.is_out_of_bounds(surface.height) {
            stats.hazards_escaped += 1;
            events.push(GameEvent::HazardEscaped { id: h.id });
            false
        } else {
            true
        }
    });

    for pickup in &mut state.pickups {
        pickup.advance();
    }
    state
        .pickups
        .retain(|p| !p.is_out_of_bounds(surface.height));

    if let Some(boss) = state.boss.as_mut() {
        boss.advance(now, surface, &mut state.ids);
    }

    resolve_collisions(state, surface, now);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::entity::Entity;
    use crate::sim::rng::{SequenceRandom, seeded};
    use crate::tuning::Tuning;

    fn surface() -> Surface {
        Surface::new(800.0, 600.0)
    }

    /// Rolls that never pass a spawn check
    fn quiet() -> SequenceRandom {
        SequenceRandom::new([0.999])
    }

    #[test]
    fn test_first_tick_has_no_elapsed_time() {
        let mut state = GameState::new(Tuning::default(), surface());
        state.player.energy = 50.0;
        tick(&mut state, &mut quiet(), surface(), 5000.0);
        // Shot fired, no regen on the first frame
        assert_eq!(state.player.energy, 48.0);
        assert_eq!(state.stats.frames, 1);
        assert_eq!(state.stats.shots_fired, 1);
    }

    #[test]
    fn test_elapsed_is_clamped() {
        let mut state = GameState::new(Tuning::default(), surface());
        tick(&mut state, &mut quiet(), surface(), 0.0);
        state.player.energy = 50.0;
        state.player.shot_cooldown_ms = f64::INFINITY;
        // 10s stall counts as one max-length frame: 10/s * 0.1s
        tick(&mut state, &mut quiet(), surface(), 10_000.0);
        assert!((state.player.energy - 51.0).abs() < 1e-4);
    }

    #[test]
    fn test_backwards_timestamp_is_zero_elapsed() {
        let mut state = GameState::new(Tuning::default(), surface());
        tick(&mut state, &mut quiet(), surface(), 1000.0);
        state.player.energy = 50.0;
        state.player.shot_cooldown_ms = f64::INFINITY;
        tick(&mut state, &mut quiet(), surface(), 900.0);
        assert_eq!(state.player.energy, 50.0);
    }

    #[test]
    fn test_hazard_escape_is_not_a_kill() {
        let mut state = GameState::new(Tuning::default(), surface());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Entity::hazard(id, Vec2::new(0.0, 599.0), Vec2::splat(30.0), 2.0, 3));

        tick(&mut state, &mut quiet(), surface(), 16.0);
        assert!(state.hazards.is_empty());
        assert_eq!(state.stats.hazards_escaped, 1);
        assert_eq!(state.destroyed_count(), 0);
        assert!(state.events.contains(&GameEvent::HazardEscaped { id }));
    }

    #[test]
    fn test_pickups_fall_and_cull() {
        let mut state = GameState::new(Tuning::default(), surface());
        let id = state.next_entity_id();
        state
            .pickups
            .push(Entity::pickup(id, Vec2::new(0.0, 100.0), Vec2::splat(30.0), 1.5));
        tick(&mut state, &mut quiet(), surface(), 16.0);
        assert_eq!(state.pickups[0].body.pos.y, 101.5);

        state.pickups[0].body.pos.y = 599.0;
        tick(&mut state, &mut quiet(), surface(), 32.0);
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_spawned_hazard_advances_same_frame() {
        let mut state = GameState::new(Tuning::default(), surface());
        // roll pass, count 1, x = 0
        let mut rng = SequenceRandom::new([0.0, 0.0, 0.0, 0.999]);
        tick(&mut state, &mut rng, surface(), 2001.0);
        assert_eq!(state.hazards.len(), 1);
        assert_eq!(state.hazards[0].body.pos.y, 2.0);
        assert_eq!(state.stats.hazards_spawned, 1);
    }

    #[test]
    fn test_difficulty_event() {
        let mut state = GameState::new(Tuning::default(), surface());
        tick(&mut state, &mut quiet(), surface(), 30_001.0);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::DifficultyRaised { .. }))
        );
    }

    #[test]
    fn test_events_reset_each_tick() {
        let mut state = GameState::new(Tuning::default(), surface());
        tick(&mut state, &mut quiet(), surface(), 30_001.0);
        assert!(!state.events.is_empty());
        tick(&mut state, &mut quiet(), surface(), 30_017.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_boss_advances_and_fires() {
        let mut state = GameState::new(Tuning::default(), surface());
        state.director.destroyed = 9;
        state.director.record_destroyed(
            &mut state.boss,
            &state.tuning,
            surface(),
            &mut state.ids,
        );

        tick(&mut state, &mut quiet(), surface(), 16.0);
        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.projectiles.len(), 3);
        assert_eq!(boss.body.pos.x, 342.0);
    }

    #[test]
    fn test_stalled_speeds_from_tuning_cannot_pile_up() {
        let tuning = Tuning::from_json(
            r#"{ "projectile": { "speed": 0.0 }, "boss": { "projectile_speed": -4.0 } }"#,
        )
        .unwrap();
        let mut state = GameState::new(tuning, surface());
        state.director.destroyed = 9;
        state.director.record_destroyed(
            &mut state.boss,
            &state.tuning,
            surface(),
            &mut state.ids,
        );
        // Keep the boss alive and out of the line of fire
        state.boss.as_mut().unwrap().hit_points = u32::MAX;
        state.player.body.pos.x = 0.0;

        for frame in 1..=2000 {
            tick(&mut state, &mut quiet(), surface(), frame as f64 * 16.0);
        }
        assert!(state.player.projectiles.len() < 50);
        assert!(state.boss.as_ref().unwrap().projectiles.len() < 50);
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut state = GameState::new(Tuning::default(), surface());
        let mut rng = seeded(12345);
        let mut now = 0.0;
        for frame in 0..20_000 {
            now += 16.0;
            // Sweep the ship back and forth
            let x = 400.0 + 350.0 * ((frame as f32) * 0.01).sin();
            state.player.set_target_position(x, 500.0, surface());
            tick(&mut state, &mut rng, surface(), now);

            let p = &state.player;
            assert!(p.hit_points <= p.max_hit_points);
            assert!(p.energy >= 0.0 && p.energy <= p.max_energy);
            assert!(state.hazards.len() <= state.tuning.hazard.max_live);
            assert!(state.director.hazard_interval_ms >= state.tuning.hazard.min_spawn_interval_ms);
            if let Some(boss) = &state.boss {
                assert!(boss.body.pos.x >= 0.0);
                assert!(boss.body.right() <= 800.0);
            }
        }
        assert!(state.stats.hazards_spawned > 0);
        assert!(state.destroyed_count() > 0);
    }
}
