// End-to-end frame stepping: resting body, teleporting pointer, flash rate limiting.

use liquid_core::*;
use rand::prelude::*;

const DT: f64 = REFERENCE_FRAME_SEC;

fn staged(target: Vec2) -> StagedInput {
    StagedInput {
        target,
        parallax_target: Vec2::ZERO,
        scroll_target: 0.0,
    }
}

#[test]
fn resting_pointer_never_flashes() {
    let config = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = SimState::default();
    let input = staged(Vec2::ZERO);
    // Several seconds at 60 Hz.
    for i in 0..600 {
        let (next, out) = state.advance(&input, 1.0, i as f64 * DT, &config, &mut rng);
        assert!(out.bolts.is_none(), "flash fired at tick {i}");
        assert_eq!(out.kinematics.motion, 0.0);
        assert_eq!(out.kinematics.chase_distance, 0.0);
        assert!(out.in_contact);
        assert!((out.visual.tail.opacity - TAIL_OPACITY_FLOOR).abs() < 1e-6);
        state = next;
    }
    assert_eq!(state.flash.strength, 0.0);
    assert_eq!(state.body.position, Vec2::ZERO);
}

#[test]
fn teleported_pointer_is_clamped_and_approached_step_by_step() {
    let config = EffectConfig::default();
    let max = config.max_radius();
    let mut rng = StdRng::seed_from_u64(2);
    let mut state = SimState::default();
    let dir = Vec2::new(3.0, -4.0).normalize();
    let input = staged(dir * (max + 500.0));

    let mut prev_chase = f32::MAX;
    let mut fire_times = Vec::new();
    for i in 0..1200 {
        let now = i as f64 * DT;
        let (next, out) = state.advance(&input, 1.0, now, &config, &mut rng);
        let k = out.kinematics;
        assert!((k.target.length() - max).abs() < 1e-3);
        assert!(k.step.length() <= config.max_step + 1e-5);
        assert!(k.chase_distance <= prev_chase + 1e-4);
        prev_chase = k.chase_distance;
        if out.bolts.is_some() {
            assert!(out.in_contact);
            fire_times.push(now);
        }
        state = next;
    }
    assert!(prev_chase < 1.0, "body should have nearly arrived, chase {prev_chase}");
    assert!(fire_times.len() >= 2, "got {} flashes", fire_times.len());
    for w in fire_times.windows(2) {
        assert!(w[1] - w[0] >= FLASH_COOLDOWN_MIN_SEC - 1e-9);
    }
}

#[test]
fn continuous_contact_keeps_flashing_until_the_body_settles() {
    let config = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = SimState::default();
    let input = staged(Vec2::new(40.0, 0.0));
    let mut fire_ticks = Vec::new();
    let mut left_contact = false;
    for i in 0..1800 {
        let (next, out) = state.advance(&input, 1.0, i as f64 * DT, &config, &mut rng);
        if !fire_ticks.is_empty() && !out.in_contact {
            left_contact = true;
        }
        if out.bolts.is_some() {
            assert!(out.kinematics.speed > SPEED_EPSILON);
            fire_ticks.push(i);
        }
        state = next;
    }
    assert!(!left_contact, "body never leaves a fixed target once in contact");
    assert!(fire_ticks.len() >= 3, "got {} flashes", fire_ticks.len());
    let longest = (FLASH_COOLDOWN_MIN_SEC + FLASH_COOLDOWN_SPAN_SEC) / DT + 1.0;
    for w in fire_ticks.windows(2) {
        let gap = (w[1] - w[0]) as f64;
        assert!(gap * DT >= FLASH_COOLDOWN_MIN_SEC - 1e-9);
        assert!(gap <= longest.ceil(), "gap of {gap} ticks while still chasing");
    }
    // Converged: the body is at rest on its target.
    assert!(*fire_ticks.last().unwrap() < 1200);
}

#[test]
fn flash_decays_geometrically_after_trigger() {
    let config = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = SimState::default();
    let input = staged(Vec2::new(40.0, 0.0));
    let mut fired_at = None;
    let mut strengths = Vec::new();
    // Stay inside the shortest cooldown so the window holds a single flash.
    for i in 0..600 {
        let (next, out) = state.advance(&input, 1.0, i as f64 * DT, &config, &mut rng);
        if out.bolts.is_some() {
            assert!(fired_at.is_none());
            assert_eq!(out.visual.flash.opacity, 1.0);
            fired_at = Some(i);
        }
        if fired_at.is_some() {
            strengths.push(next.flash.strength);
            if strengths.len() == 50 {
                break;
            }
        }
        state = next;
    }
    assert!(fired_at.is_some());
    assert!((strengths[0] - FLASH_DECAY).abs() < 1e-6);
    for w in strengths.windows(2) {
        assert!((w[1] - w[0] * FLASH_DECAY).abs() < 1e-6);
    }
}

#[test]
fn flashes_respect_cooldown() {
    let config = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = SimState::default();
    // Swing the target back and forth so contact episodes keep starting.
    let a = staged(Vec2::new(40.0, 0.0));
    let b = staged(Vec2::new(-40.0, 0.0));
    let mut fire_times = Vec::new();
    for i in 0..6000 {
        let now = i as f64 * DT;
        let input = if (i / 150) % 2 == 0 { &a } else { &b };
        let (next, out) = state.advance(input, 1.0, now, &config, &mut rng);
        if out.bolts.is_some() {
            fire_times.push(now);
        }
        state = next;
    }
    assert!(fire_times.len() > 3, "expected repeated flashes, got {}", fire_times.len());
    for w in fire_times.windows(2) {
        assert!(w[1] - w[0] >= FLASH_COOLDOWN_MIN_SEC - 1e-9);
    }
}

#[test]
fn contact_during_cooldown_waits_for_window() {
    let config = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(6);
    let mut state = SimState {
        flash: FlashState {
            strength: 0.0,
            next_eligible: 5.0,
        },
        ..SimState::default()
    };
    // Contact comes early; the body is still closing in when the window opens.
    let input = staged(Vec2::new(40.0, 0.0));
    let mut fired = Vec::new();
    let mut contact_from = None;
    for i in 0..420 {
        let now = i as f64 * DT;
        let (next, out) = state.advance(&input, 1.0, now, &config, &mut rng);
        if out.in_contact && contact_from.is_none() {
            contact_from = Some(now);
        }
        if out.bolts.is_some() {
            fired.push(now);
        }
        state = next;
    }
    assert!(contact_from.map_or(false, |t| t < 1.0));
    assert!(!fired.is_empty());
    assert!(fired[0] >= 5.0 && fired[0] < 5.0 + 2.0 * DT);
}

#[test]
fn parallax_and_scroll_are_smoothed_toward_targets() {
    let config = EffectConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = SimState::default();
    let input = StagedInput {
        target: Vec2::ZERO,
        parallax_target: Vec2::new(12.0, -6.0),
        scroll_target: -50.0,
    };
    let (next, out) = state.advance(&input, 1.0, 0.0, &config, &mut rng);
    assert!(out.visual.parallax.x > 0.0 && out.visual.parallax.x < 12.0);
    assert!(out.visual.scroll_offset < 0.0 && out.visual.scroll_offset > -50.0);
    state = next;
    for i in 1..400 {
        state = state.advance(&input, 1.0, i as f64 * DT, &config, &mut rng).0;
    }
    assert!((state.parallax - Vec2::new(12.0, -6.0)).length() < 0.01);
    assert!((state.scroll_offset + 50.0).abs() < 0.01);
}

#[test]
fn visual_layers_follow_motion() {
    let config = EffectConfig::default();
    let moving = compose(
        &ComposeInput {
            position: Vec2::new(10.0, 0.0),
            flow: Vec2::X,
            motion: 1.0,
            reach: 0.0,
            flash: 0.0,
            parallax: Vec2::ZERO,
            scroll_offset: 0.0,
        },
        &config,
    );
    assert!(moving.body.scale.x > 1.0 && moving.body.scale.y < 1.0);
    assert!(moving.tail.offset.x < 10.0, "tail trails behind the flow");
    assert!(moving.tail.opacity > TAIL_OPACITY_FLOOR);
    assert!(moving.body.corner_radii[0] < moving.body.corner_radii[1]);
    assert_eq!(moving.body.rotation_deg, 0.0);

    let resting = compose(
        &ComposeInput {
            position: Vec2::ZERO,
            flow: Vec2::new(0.0, 1.0),
            motion: 0.0,
            reach: 1.0,
            flash: 1.0,
            parallax: Vec2::ZERO,
            scroll_offset: 0.0,
        },
        &config,
    );
    assert_eq!(resting.body.scale, Vec2::ONE);
    assert_eq!(resting.body.corner_radii, [50.0; 4]);
    assert!((resting.body.rotation_deg - 90.0).abs() < 1e-4);
    assert_eq!(resting.tail.opacity, TAIL_OPACITY_FLOOR);
    assert_eq!(resting.flash.opacity, 1.0);
    assert!(resting.glow.opacity <= 1.0);
}
