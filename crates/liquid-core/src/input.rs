//! Input tracker: raw pointer and scroll staging plus the delayed target commit.
//!
//! Event handlers only ever call [`InputTracker::apply`]; the frame tick reads
//! [`InputTracker::staged`]. The tracker never computes visuals itself.

use crate::config::EffectConfig;
use glam::Vec2;

/// Viewport size and the container's center, both in viewport px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub viewport: Vec2,
    pub container_center: Vec2,
}

impl Geometry {
    pub fn new(viewport: Vec2, container_center: Vec2) -> Self {
        Self {
            viewport,
            container_center,
        }
    }

    #[inline]
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    /// Vertical scroll distance in px.
    Scroll { offset: f32 },
    Resize(Geometry),
}

/// What the tracker needs the host's one-shot timer to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerCommand {
    Arm { delay_ms: f64 },
    Cancel,
}

/// Input as seen by the frame tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagedInput {
    /// Delayed target relative to the container center.
    pub target: Vec2,
    pub parallax_target: Vec2,
    pub scroll_target: f32,
}

#[derive(Clone, Debug)]
pub struct InputTracker {
    geometry: Geometry,
    raw: Vec2,
    delayed: Vec2,
    pointer_inside: bool,
    commit_pending: bool,
    parallax_target: Vec2,
    scroll_target: f32,

    reaction_delay_ms: f64,
    parallax_range: f32,
    scroll_gain: f32,
    scroll_max: f32,
}

impl InputTracker {
    pub fn new(geometry: Geometry, config: &EffectConfig) -> Self {
        let center = geometry.viewport_center();
        Self {
            geometry,
            raw: center,
            delayed: center,
            pointer_inside: false,
            commit_pending: false,
            parallax_target: Vec2::ZERO,
            scroll_target: 0.0,
            reaction_delay_ms: config.reaction_delay_ms,
            parallax_range: config.pointer_parallax_range,
            scroll_gain: config.scroll_parallax_gain,
            scroll_max: config.scroll_parallax_max,
        }
    }

    /// Stage one input event. Returns the timer action the host must perform, if any.
    pub fn apply(&mut self, event: InputEvent) -> Option<TimerCommand> {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.raw = Vec2::new(x, y);
                self.pointer_inside = true;
                self.parallax_target = self.normalized_pointer() * self.parallax_range;
                // Rapid moves ride the timer that is already armed.
                if self.commit_pending {
                    None
                } else {
                    self.commit_pending = true;
                    Some(TimerCommand::Arm {
                        delay_ms: self.reaction_delay_ms,
                    })
                }
            }
            InputEvent::PointerLeave => {
                let center = self.geometry.viewport_center();
                self.raw = center;
                self.delayed = center;
                self.pointer_inside = false;
                self.parallax_target = Vec2::ZERO;
                if self.commit_pending {
                    self.commit_pending = false;
                    Some(TimerCommand::Cancel)
                } else {
                    None
                }
            }
            InputEvent::Scroll { offset } => {
                self.scroll_target = scroll_parallax(offset, self.scroll_gain, self.scroll_max);
                None
            }
            InputEvent::Resize(geometry) => {
                self.geometry = geometry;
                if !self.pointer_inside {
                    let center = geometry.viewport_center();
                    self.raw = center;
                    self.delayed = center;
                }
                self.parallax_target = if self.pointer_inside {
                    self.normalized_pointer() * self.parallax_range
                } else {
                    Vec2::ZERO
                };
                None
            }
        }
    }

    /// The delayed-commit timer fired: the body now perceives the latest raw sample.
    pub fn commit(&mut self) {
        self.delayed = self.raw;
        self.commit_pending = false;
    }

    pub fn staged(&self) -> StagedInput {
        StagedInput {
            target: self.delayed - self.geometry.container_center,
            parallax_target: self.parallax_target,
            scroll_target: self.scroll_target,
        }
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn delayed(&self) -> Vec2 {
        self.delayed
    }

    #[inline]
    pub fn commit_pending(&self) -> bool {
        self.commit_pending
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn normalized_pointer(&self) -> Vec2 {
        let half = self.geometry.viewport_center().max(Vec2::ONE);
        ((self.raw - self.geometry.viewport_center()) / half).clamp(Vec2::NEG_ONE, Vec2::ONE)
    }
}

/// Negative, capped parallax offset for a scroll distance. Overscroll counts as zero.
#[inline]
pub fn scroll_parallax(scroll_y: f32, gain: f32, max: f32) -> f32 {
    -(scroll_y.max(0.0) * gain).min(max)
}
