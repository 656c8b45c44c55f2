//! Whole-effect simulation state and the per-frame step.

use crate::config::EffectConfig;
use crate::constants::{BOLT_COUNT, SPEED_EPSILON};
use crate::flash::{random_bolt_seed, trigger_flash, BoltPath, FlashState};
use crate::input::StagedInput;
use crate::motion::{smoothing_for_ratio, BodyState, Kinematics};
use crate::visual::{compose, ComposeInput, VisualFrame};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimState {
    pub body: BodyState,
    pub flash: FlashState,
    pub parallax: Vec2,
    pub scroll_offset: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub visual: VisualFrame,
    /// Present only on the tick a flash fired.
    pub bolts: Option<[BoltPath; BOLT_COUNT]>,
    pub kinematics: Kinematics,
    /// Chase distance within the contact radius, moving or not.
    pub in_contact: bool,
}

impl SimState {
    /// One frame. `ratio` is the elapsed time in 60 Hz ticks, `now_sec` the clock reading.
    pub fn advance(
        &self,
        input: &StagedInput,
        ratio: f32,
        now_sec: f64,
        config: &EffectConfig,
        rng: &mut impl Rng,
    ) -> (SimState, FrameOutput) {
        let (body, kin) = self.body.integrate(input.target, ratio, config);

        let in_contact = kin.chase_distance <= config.contact_radius(kin.motion);
        // A body sitting still on its target is not catching anything.
        let moving = kin.speed > SPEED_EPSILON;
        let mut flash = self.flash;
        let mut bolts = None;
        if in_contact && moving && flash.is_eligible(now_sec) {
            flash.trigger(now_sec, config, rng);
            let seed = random_bolt_seed(rng);
            bolts = Some(trigger_flash(rng, seed));
            log::debug!(
                "[flash] fired at t={:.3}s, next eligible at {:.3}s",
                now_sec,
                flash.next_eligible
            );
        }

        let parallax = self.parallax.lerp(
            input.parallax_target,
            smoothing_for_ratio(config.pointer_parallax_smoothing, ratio),
        );
        let scroll_offset = self.scroll_offset
            + (input.scroll_target - self.scroll_offset)
                * smoothing_for_ratio(config.scroll_parallax_smoothing, ratio);

        let visual = compose(
            &ComposeInput {
                position: body.position,
                flow: body.flow,
                motion: kin.motion,
                reach: kin.reach,
                flash: flash.strength,
                parallax,
                scroll_offset,
            },
            config,
        );

        flash.decay(config.flash_decay, ratio);

        (
            SimState {
                body,
                flash,
                parallax,
                scroll_offset,
            },
            FrameOutput {
                visual,
                bolts,
                kinematics: kin,
                in_contact,
            },
        )
    }
}
