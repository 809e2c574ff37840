use glam::Vec2;
use proptest::prelude::*;

use meteor_strike::Tuning;
use meteor_strike::sim::{
    Body, Boss, Entity, EntityIds, GameState, Player, SequenceRandom, Sprite, Surface,
    check_collision, place_apart, tick,
};

fn surface() -> Surface {
    Surface::new(800.0, 600.0)
}

fn player() -> Player {
    let tuning = Tuning::default();
    Player::new(&tuning.ship, &tuning.projectile, surface())
}

#[derive(Debug, Clone)]
enum ShipOp {
    Damage(u32, f64),
    Spend(f32),
    Gain(f32),
    Regen(f64),
}

fn ship_op() -> impl Strategy<Value = ShipOp> {
    prop_oneof![
        (0u32..500, 0.0f64..100_000.0).prop_map(|(d, t)| ShipOp::Damage(d, t)),
        (0.0f32..200.0).prop_map(ShipOp::Spend),
        (0.0f32..200.0).prop_map(ShipOp::Gain),
        (0.0f64..5000.0).prop_map(ShipOp::Regen),
    ]
}

proptest! {
    #[test]
    fn health_and_energy_stay_in_range(ops in prop::collection::vec(ship_op(), 1..64)) {
        let mut p = player();
        for op in ops {
            match op {
                ShipOp::Damage(d, t) => { p.apply_damage(d, t); }
                ShipOp::Spend(e) => { p.spend_energy(e); }
                ShipOp::Gain(e) => p.gain_energy(e),
                ShipOp::Regen(ms) => p.regenerate_energy(ms),
            }
            prop_assert!(p.hit_points <= p.max_hit_points);
            prop_assert!(p.energy >= 0.0);
            prop_assert!(p.energy <= p.max_energy);
        }
    }

    #[test]
    fn pointer_keeps_ship_on_surface(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
        w in 60.0f32..2000.0,
        h in 60.0f32..2000.0,
    ) {
        let s = Surface::new(w, h);
        let mut p = player();
        p.set_target_position(x, y, s);
        prop_assert!(p.body.pos.x >= 0.0);
        prop_assert!(p.body.pos.y >= 0.0);
        prop_assert!(p.body.right() <= w + 1e-3);
        prop_assert!(p.body.bottom() <= h + 1e-3);
    }

    #[test]
    fn boss_patrol_stays_on_surface(start in 0.0f32..680.0, steps in 1usize..2000) {
        let tuning = Tuning::default();
        let mut boss = Boss::new(1, &tuning.boss, &tuning.projectile, surface());
        boss.body.pos.x = start;
        for _ in 0..steps {
            boss.patrol(surface());
            prop_assert!(boss.body.pos.x >= 0.0);
            prop_assert!(boss.body.right() <= 800.0);
        }
    }

    #[test]
    fn placement_clears_a_single_neighbour(x in 0.0f32..770.0, other in 0.0f32..770.0) {
        let rock = Entity::hazard(1, Vec2::new(other, 0.0), Vec2::splat(30.0), 2.0, 3);
        let placed = place_apart(x, 0.0, 30.0, surface(), std::slice::from_ref(&rock));
        prop_assert!(placed >= 0.0 && placed <= 770.0);
        prop_assert!((placed - other).abs() >= 45.0);
    }

    #[test]
    fn collision_is_symmetric(
        ax in -100.0f32..100.0, ay in -100.0f32..100.0,
        bx in -100.0f32..100.0, by in -100.0f32..100.0,
        aw in 1.0f32..50.0, ah in 1.0f32..50.0,
        bw in 1.0f32..50.0, bh in 1.0f32..50.0,
    ) {
        let a = Body::new(Vec2::new(ax, ay), Vec2::new(aw, ah), 0.0, Sprite::Bullet);
        let b = Body::new(Vec2::new(bx, by), Vec2::new(bw, bh), 0.0, Sprite::Meteor);
        prop_assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
    }

    #[test]
    fn scripted_runs_respect_caps(
        samples in prop::collection::vec(0.0f32..1.0, 1..32),
        frames in 1u32..600,
    ) {
        let mut state = GameState::new(Tuning::default(), surface());
        let mut rng = SequenceRandom::new(samples);
        for frame in 0..frames {
            tick(&mut state, &mut rng, surface(), f64::from(frame) * 50.0);
            prop_assert!(state.hazards.len() <= state.tuning.hazard.max_live);
            prop_assert!(state.director.hazard_interval_ms >= state.tuning.hazard.min_spawn_interval_ms);
        }
    }
}

#[test]
fn fire_rate_respects_cooldown() {
    let mut p = player();
    let mut ids = EntityIds::default();
    let fired: Vec<f64> = [0.0, 50.0, 100.0, 150.0, 200.0, 250.0]
        .into_iter()
        .filter(|&t| p.fire(t, &mut ids))
        .collect();
    assert_eq!(fired, vec![0.0, 250.0]);
}
