// Host-side tests for the DOM contract and core tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use liquid_core::*;

#[test]
fn anchor_selectors_are_distinct() {
    let mut all = vec![
        STAGE_SELECTOR,
        BODY_SELECTOR,
        TAIL_SELECTOR,
        GLOW_SELECTOR,
        FLASH_SELECTOR,
    ];
    all.extend(BOLT_SELECTORS);
    let n = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), n);
    assert_eq!(BOLT_SELECTORS.len(), BOLT_COUNT);
    assert!(all.iter().all(|s| s.starts_with("[data-liquid=")));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for k in [
        POSITION_SMOOTHING,
        FLOW_SMOOTHING,
        POINTER_PARALLAX_SMOOTHING,
        SCROLL_PARALLAX_SMOOTHING,
        FLASH_DECAY,
    ] {
        assert!(k > 0.0 && k < 1.0);
    }
    // The heading reacts faster than the position.
    assert!(FLOW_SMOOTHING > POSITION_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_leaves_room_to_move() {
    assert!(CONTAINER_RADIUS > BODY_RADIUS + CONTAINMENT_MARGIN);
    assert!(EffectConfig::default().max_radius() > REACH_DISTANCE);
    assert!(MAX_STEP > 0.0);
    assert!(BOLT_DROP_MIN > 0.0 && BOLT_DROP_MAX > BOLT_DROP_MIN);
    assert!(BOLT_SEGMENTS.windows(2).all(|w| w[1] <= w[0]));
}
