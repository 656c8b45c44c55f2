//! Visual composition. Every layer style is a pure function of the body state,
//! motion, reach and flash strength.

use crate::config::EffectConfig;
use crate::constants::*;
use glam::Vec2;

/// Numeric style of one visual anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// Translation from the container center, px.
    pub offset: Vec2,
    /// Rotation aligning the layer's x axis with the flow.
    pub rotation_deg: f32,
    pub scale: Vec2,
    pub opacity: f32,
    pub blur_px: f32,
    pub brightness: f32,
    /// Border radius per corner (top-left, top-right, bottom-right, bottom-left), percent.
    pub corner_radii: [f32; 4],
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::ONE,
            opacity: 1.0,
            blur_px: 0.0,
            brightness: 1.0,
            corner_radii: [50.0; 4],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualFrame {
    pub body: LayerStyle,
    pub tail: LayerStyle,
    pub glow: LayerStyle,
    pub flash: LayerStyle,
    /// Smoothed pointer parallax applied to the container.
    pub parallax: Vec2,
    /// Smoothed scroll parallax (vertical, px).
    pub scroll_offset: f32,
}

pub struct ComposeInput {
    pub position: Vec2,
    pub flow: Vec2,
    pub motion: f32,
    pub reach: f32,
    pub flash: f32,
    pub parallax: Vec2,
    pub scroll_offset: f32,
}

pub fn compose(input: &ComposeInput, config: &EffectConfig) -> VisualFrame {
    let ComposeInput {
        position,
        flow,
        motion,
        reach,
        flash,
        ..
    } = *input;
    let rotation_deg = flow.y.atan2(flow.x).to_degrees();

    // Leading corners stay round, trailing corners taper into the tail.
    let trail = 50.0 - BODY_TAPER_PCT * motion;
    let body = LayerStyle {
        offset: position,
        rotation_deg,
        scale: Vec2::new(1.0 + BODY_STRETCH_GAIN * motion, 1.0 - BODY_SQUASH_GAIN * motion),
        opacity: 1.0,
        blur_px: BODY_MOTION_BLUR_PX * motion,
        brightness: 1.0 + 0.35 * flash + 0.12 * reach,
        corner_radii: [trail, 50.0, 50.0, trail],
    };

    let lag = config.body_radius * (TAIL_LAG_BASE + TAIL_LAG_SPAN * motion);
    let tail = LayerStyle {
        offset: position - flow * lag,
        rotation_deg,
        scale: Vec2::new(0.6 + 0.7 * motion, 0.6 - 0.15 * motion),
        opacity: tail_opacity(motion),
        blur_px: 3.0 + 5.0 * motion,
        brightness: 1.0,
        corner_radii: [50.0; 4],
    };

    let glow = LayerStyle {
        offset: position * GLOW_FOLLOW,
        rotation_deg: 0.0,
        scale: Vec2::splat(1.0 + 0.18 * reach + 0.25 * flash),
        opacity: (GLOW_BASE_OPACITY + 0.42 * reach + 0.4 * flash).min(1.0),
        blur_px: GLOW_BASE_BLUR_PX + 10.0 * flash,
        brightness: 1.0 + 0.9 * flash,
        corner_radii: [50.0; 4],
    };

    let flash_layer = LayerStyle {
        offset: position,
        opacity: flash.clamp(0.0, 1.0),
        brightness: 1.0 + flash,
        ..LayerStyle::default()
    };

    VisualFrame {
        body,
        tail,
        glow,
        flash: flash_layer,
        parallax: input.parallax,
        scroll_offset: input.scroll_offset,
    }
}

#[inline]
pub fn tail_opacity(motion: f32) -> f32 {
    TAIL_OPACITY_FLOOR + TAIL_OPACITY_SPAN * motion.clamp(0.0, 1.0)
}
