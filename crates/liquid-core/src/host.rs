//! The seam between the simulation and whatever drives it (browser, test fake).

use crate::constants::BOLT_COUNT;
use crate::flash::BoltPath;
use crate::visual::VisualFrame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(pub i32);

/// Once-per-display-refresh callbacks. The host calls `Controller::on_frame` when one fires.
pub trait FrameScheduler {
    fn request_tick(&mut self) -> Option<TickHandle>;
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// One-shot timer for the delayed target commit. The host calls
/// `Controller::on_commit_timer` when it fires.
pub trait CommitTimer {
    fn arm(&mut self, delay_ms: f64) -> Option<TimerHandle>;
    fn cancel(&mut self, handle: TimerHandle);
}

pub trait RenderTarget {
    fn render(&mut self, frame: &VisualFrame);
    fn draw_bolts(&mut self, bolts: &[BoltPath; BOLT_COUNT]);
}

pub trait Host: FrameScheduler + CommitTimer + RenderTarget {}

impl<T: FrameScheduler + CommitTimer + RenderTarget> Host for T {}
