//! Event emitter: rate-limited flash and procedural lightning bolts.

use crate::config::EffectConfig;
use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashState {
    /// 0..1, decays every tick.
    pub strength: f32,
    /// Clock reading (seconds) before which no new flash may fire.
    pub next_eligible: f64,
}

impl Default for FlashState {
    fn default() -> Self {
        Self {
            strength: 0.0,
            next_eligible: 0.0,
        }
    }
}

impl FlashState {
    #[inline]
    pub fn is_eligible(&self, now_sec: f64) -> bool {
        now_sec >= self.next_eligible
    }

    /// Fire: full strength and a randomized cooldown window.
    pub fn trigger(&mut self, now_sec: f64, config: &EffectConfig, rng: &mut impl Rng) {
        self.strength = 1.0;
        self.next_eligible = now_sec
            + config.flash_cooldown_min_sec
            + rng.gen::<f64>() * config.flash_cooldown_span_sec;
    }

    #[inline]
    pub fn decay(&mut self, factor: f32, ratio: f32) {
        self.strength *= factor.powf(ratio);
    }
}

/// Jagged polyline in the flash layer's 100x100 viewBox.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoltPath {
    pub points: SmallVec<[Vec2; 8]>,
}

impl BoltPath {
    #[inline]
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// SVG path data: `M x y L x y ...`, one decimal.
    pub fn svg_path_data(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 12);
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{cmd}{:.1} {:.1}", p.x, p.y);
        }
        d
    }
}

/// One bolt: from `seed`, each segment jitters sideways within `[-spread, spread]`
/// and drops by `[0.75, 1.45] * step`.
pub fn generate_bolt(
    rng: &mut impl Rng,
    seed: Vec2,
    segments: usize,
    spread: f32,
    step: f32,
) -> BoltPath {
    let mut points = SmallVec::with_capacity(segments + 1);
    let mut p = seed;
    points.push(p);
    for _ in 0..segments {
        let dx = if spread > 0.0 {
            rng.gen_range(-spread..=spread)
        } else {
            0.0
        };
        let dy = rng.gen_range(BOLT_DROP_MIN..=BOLT_DROP_MAX) * step;
        p += Vec2::new(dx, dy);
        points.push(p);
    }
    BoltPath { points }
}

/// Three bolts around `seed`, each with fewer or shorter segments than the last.
pub fn trigger_flash(rng: &mut impl Rng, seed: Vec2) -> [BoltPath; BOLT_COUNT] {
    std::array::from_fn(|i| {
        let jitter = if i == 0 {
            Vec2::ZERO
        } else {
            Vec2::new(
                rng.gen_range(-BOLT_SEED_JITTER[0]..=BOLT_SEED_JITTER[0]),
                rng.gen_range(-BOLT_SEED_JITTER[1]..=BOLT_SEED_JITTER[1]),
            )
        };
        let falloff = i as i32;
        generate_bolt(
            &mut *rng,
            seed + jitter,
            BOLT_SEGMENTS[i],
            BOLT_BASE_SPREAD * BOLT_SPREAD_FALLOFF.powi(falloff),
            BOLT_BASE_STEP * BOLT_STEP_FALLOFF.powi(falloff),
        )
    })
}

/// Random base point for a new set of bolts.
pub fn random_bolt_seed(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(BOLT_SEED_X.0..=BOLT_SEED_X.1),
        rng.gen_range(BOLT_SEED_Y.0..=BOLT_SEED_Y.1),
    )
}
