//! Runtime configuration for one mounted effect.
//!
//! Every tuned number lives here as a field so hosts (and tests) can adjust the
//! feel without touching the integrator. `Default` mirrors `constants.rs`.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub container_radius: f32,
    pub body_radius: f32,
    pub margin: f32,

    pub position_smoothing: f32,
    pub max_step: f32,
    pub flow_smoothing: f32,

    pub reach_distance: f32,
    pub contact_base: f32,
    pub contact_motion_gain: f32,

    pub flash_decay: f32,
    pub flash_cooldown_min_sec: f64,
    pub flash_cooldown_span_sec: f64,

    pub reaction_delay_ms: f64,
    pub pointer_parallax_range: f32,
    pub pointer_parallax_smoothing: f32,
    pub scroll_parallax_gain: f32,
    pub scroll_parallax_max: f32,
    pub scroll_parallax_smoothing: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            container_radius: CONTAINER_RADIUS,
            body_radius: BODY_RADIUS,
            margin: CONTAINMENT_MARGIN,
            position_smoothing: POSITION_SMOOTHING,
            max_step: MAX_STEP,
            flow_smoothing: FLOW_SMOOTHING,
            reach_distance: REACH_DISTANCE,
            contact_base: CONTACT_BASE,
            contact_motion_gain: CONTACT_MOTION_GAIN,
            flash_decay: FLASH_DECAY,
            flash_cooldown_min_sec: FLASH_COOLDOWN_MIN_SEC,
            flash_cooldown_span_sec: FLASH_COOLDOWN_SPAN_SEC,
            reaction_delay_ms: REACTION_DELAY_MS,
            pointer_parallax_range: POINTER_PARALLAX_RANGE,
            pointer_parallax_smoothing: POINTER_PARALLAX_SMOOTHING,
            scroll_parallax_gain: SCROLL_PARALLAX_GAIN,
            scroll_parallax_max: SCROLL_PARALLAX_MAX,
            scroll_parallax_smoothing: SCROLL_PARALLAX_SMOOTHING,
        }
    }
}

impl EffectConfig {
    pub fn with_container_radius(mut self, radius: f32) -> Self {
        self.container_radius = radius;
        self
    }

    /// Largest distance the body's target may sit from the container center.
    #[inline]
    pub fn max_radius(&self) -> f32 {
        (self.container_radius - self.body_radius - self.margin).max(0.0)
    }

    /// Contact radius at the given motion level; grows slightly with speed.
    #[inline]
    pub fn contact_radius(&self, motion: f32) -> f32 {
        self.body_radius * (self.contact_base + self.contact_motion_gain * motion)
    }
}
