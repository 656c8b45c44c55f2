//! Body kinematics: containment clamp, capped exponential pull, flow heading.

use crate::config::EffectConfig;
use crate::constants::{MAX_FRAME_RATIO, REFERENCE_FRAME_SEC, SPEED_EPSILON};
use glam::Vec2;

/// Kinematic state of the droplet, relative to the container center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub previous_position: Vec2,
    /// Smoothed unit heading.
    pub flow: Vec2,
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            previous_position: Vec2::ZERO,
            flow: Vec2::X,
        }
    }
}

/// Per-tick quantities derived while integrating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Kinematics {
    /// Target after the containment clamp.
    pub target: Vec2,
    /// Displacement applied this tick, at most `max_step * ratio` long.
    pub step: Vec2,
    /// Displacement per reference tick.
    pub speed: f32,
    /// 0..1, speed relative to the step cap.
    pub motion: f32,
    pub chase_distance: f32,
    /// 0..1 proximity to the target.
    pub reach: f32,
}

/// Scale `v` down to `max_len` if it is longer, keeping its direction.
#[inline]
pub fn clamp_to_radius(v: Vec2, max_len: f32) -> Vec2 {
    let len = v.length();
    if len > max_len && len > 0.0 {
        v * (max_len / len)
    } else {
        v
    }
}

/// Per-tick smoothing factor `k` expressed for a tick `ratio` reference frames long.
#[inline]
pub fn smoothing_for_ratio(k: f32, ratio: f32) -> f32 {
    1.0 - (1.0 - k).powf(ratio)
}

impl BodyState {
    /// Advance one tick toward `target` (container-relative, unclamped).
    ///
    /// `max_step` bounds the move per 60 Hz reference tick, not per call: a call
    /// covering `ratio` reference ticks moves at most `max_step * ratio`, so a
    /// dropped frame (ratio up to 3) may jump up to three steps at once.
    pub fn integrate(
        &self,
        target: Vec2,
        ratio: f32,
        config: &EffectConfig,
    ) -> (BodyState, Kinematics) {
        let target = clamp_to_radius(target, config.max_radius());

        let pull = smoothing_for_ratio(config.position_smoothing, ratio);
        let step = clamp_to_radius((target - self.position) * pull, config.max_step * ratio);
        let position = self.position + step;

        let velocity = position - self.previous_position;
        let distance = velocity.length();
        let heading = if distance > SPEED_EPSILON {
            velocity / distance
        } else {
            self.flow
        };
        let blend = smoothing_for_ratio(config.flow_smoothing, ratio);
        let flow = self.flow.lerp(heading, blend).try_normalize().unwrap_or(self.flow);

        let speed = if ratio > 0.0 { distance / ratio } else { 0.0 };
        let motion = if config.max_step > 0.0 {
            (speed / config.max_step).min(1.0)
        } else {
            0.0
        };
        let chase_distance = (target - position).length();
        let reach = if config.reach_distance > 0.0 {
            (1.0 - chase_distance / config.reach_distance).max(0.0)
        } else {
            0.0
        };

        let next = BodyState {
            position,
            // End of tick: the next velocity is measured from here.
            previous_position: position,
            flow,
        };
        (
            next,
            Kinematics {
                target,
                step,
                speed,
                motion,
                chase_distance,
                reach,
            },
        )
    }
}

/// Turns monotonic clock readings (seconds) into reference-tick ratios.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Ratio of the elapsed time to one 60 Hz tick; 1.0 on the first frame.
    pub fn advance(&mut self, now_sec: f64) -> f32 {
        let ratio = match self.last {
            Some(last) => {
                let r = ((now_sec - last) / REFERENCE_FRAME_SEC) as f32;
                if r.is_finite() {
                    r.clamp(0.0, MAX_FRAME_RATIO)
                } else {
                    0.0
                }
            }
            None => 1.0,
        };
        self.last = Some(now_sec);
        ratio
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
