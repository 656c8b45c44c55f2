//! One mounted effect: owns the simulation state and drives it through a [`Host`].

use crate::config::EffectConfig;
use crate::error::MountError;
use crate::host::{Host, TickHandle, TimerHandle};
use crate::input::{Geometry, InputEvent, InputTracker, TimerCommand};
use crate::motion::FrameClock;
use crate::sim::{FrameOutput, SimState};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Running { tick: Option<TickHandle> },
    Stopped,
}

pub struct Controller<H: Host> {
    config: EffectConfig,
    host: H,
    tracker: InputTracker,
    state: SimState,
    clock: FrameClock,
    rng: StdRng,
    lifecycle: Lifecycle,
    commit_timer: Option<TimerHandle>,
    last_output: Option<FrameOutput>,
}

impl<H: Host> Controller<H> {
    /// Unseeded: bolt shapes differ on every run.
    pub fn new(config: EffectConfig, geometry: Geometry, host: H) -> Self {
        Self::with_rng(config, geometry, host, StdRng::from_entropy())
    }

    pub fn with_seed(config: EffectConfig, geometry: Geometry, host: H, seed: u64) -> Self {
        Self::with_rng(config, geometry, host, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EffectConfig, geometry: Geometry, host: H, rng: StdRng) -> Self {
        let tracker = InputTracker::new(geometry, &config);
        Self {
            config,
            host,
            tracker,
            state: SimState::default(),
            clock: FrameClock::new(),
            rng,
            lifecycle: Lifecycle::Idle,
            commit_timer: None,
            last_output: None,
        }
    }

    /// Start the frame loop. Refuses (and does nothing) when reduced motion is preferred.
    pub fn mount(&mut self, reduced_motion: bool) -> Result<(), MountError> {
        if self.lifecycle != Lifecycle::Idle {
            return Err(MountError::AlreadyMounted);
        }
        if reduced_motion {
            return Err(MountError::ReducedMotion);
        }
        let tick = self
            .host
            .request_tick()
            .ok_or(MountError::SchedulerUnavailable)?;
        self.lifecycle = Lifecycle::Running { tick: Some(tick) };
        log::info!(
            "[liquid] mounted, containment radius {:.1}px",
            self.config.max_radius()
        );
        Ok(())
    }

    /// Stop for good: cancels the pending tick and commit timer. Returns false if not running.
    pub fn unmount(&mut self) -> bool {
        let Lifecycle::Running { tick } = self.lifecycle else {
            return false;
        };
        if let Some(tick) = tick {
            self.host.cancel_tick(tick);
        }
        if let Some(timer) = self.commit_timer.take() {
            self.host.cancel(timer);
        }
        self.lifecycle = Lifecycle::Stopped;
        log::info!("[liquid] unmounted");
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running { .. })
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if !self.is_running() {
            return;
        }
        match self.tracker.apply(event) {
            Some(TimerCommand::Arm { delay_ms }) => match self.host.arm(delay_ms) {
                Some(handle) => self.commit_timer = Some(handle),
                None => {
                    log::warn!("[liquid] commit timer unavailable, committing immediately");
                    self.tracker.commit();
                }
            },
            Some(TimerCommand::Cancel) => {
                if let Some(timer) = self.commit_timer.take() {
                    self.host.cancel(timer);
                }
            }
            None => {}
        }
    }

    pub fn on_commit_timer(&mut self) {
        if !self.is_running() {
            return;
        }
        self.commit_timer = None;
        self.tracker.commit();
    }

    /// Advance one frame at clock reading `now_sec` and request the next one.
    /// A refused request ends the run, as if unmounted.
    pub fn on_frame(&mut self, now_sec: f64) {
        if !self.is_running() {
            return;
        }
        let ratio = self.clock.advance(now_sec);
        let (state, output) = self.state.advance(
            &self.tracker.staged(),
            ratio,
            now_sec,
            &self.config,
            &mut self.rng,
        );
        self.state = state;
        self.host.render(&output.visual);
        if let Some(bolts) = &output.bolts {
            self.host.draw_bolts(bolts);
        }
        self.last_output = Some(output);

        match self.host.request_tick() {
            Some(tick) => self.lifecycle = Lifecycle::Running { tick: Some(tick) },
            None => {
                log::warn!("[liquid] frame scheduler refused a tick, animation stops");
                if let Some(timer) = self.commit_timer.take() {
                    self.host.cancel(timer);
                }
                self.lifecycle = Lifecycle::Stopped;
            }
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn last_output(&self) -> Option<&FrameOutput> {
        self.last_output.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
