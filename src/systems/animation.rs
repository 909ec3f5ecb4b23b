//! Frame-driven animation of the rotation angles
//!
//! The driver is ticked once per display frame. After `start` it waits a
//! short startup delay so the drawing surface is ready, renders the first
//! frame at the current angles, and from then on advances every angle by a
//! fixed per-frame step. Steps are per frame, not per second.

use std::time::{Duration, Instant};
use hyperview_math::RotationAngles;

/// Default per-frame rotation step
pub const DEFAULT_SPEEDS: RotationAngles = RotationAngles::new(0.008, 0.006, 0.007);

/// Default delay between mount and the first frame
pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_millis(140);

/// Driver state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// No surface, nothing scheduled
    Idle,
    /// Started, waiting out the startup delay
    Starting { since: Instant },
    /// Advancing once per tick
    Running { frames: u64 },
}

/// What a tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Driver is idle; nothing to draw
    Idle,
    /// Startup delay not yet elapsed
    Waiting,
    /// First frame; angles unchanged, draw it
    Started,
    /// Angles advanced by one step, draw it
    Advanced,
}

impl Tick {
    /// Whether the caller should render after this tick
    #[inline]
    pub fn needs_render(self) -> bool {
        matches!(self, Tick::Started | Tick::Advanced)
    }
}

/// Advances the rotation once per frame while running
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    state: AnimationState,
    /// Per-frame rotation step
    pub speeds: RotationAngles,
    /// Delay between `start` and the first frame
    pub startup_delay: Duration,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            state: AnimationState::Idle,
            speeds: DEFAULT_SPEEDS,
            startup_delay: DEFAULT_STARTUP_DELAY,
        }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Started and not stopped (waiting or running)
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, AnimationState::Idle)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// Frames advanced since the driver last entered `Running`
    pub fn frames(&self) -> u64 {
        match self.state {
            AnimationState::Running { frames } => frames,
            _ => 0,
        }
    }

    /// Schedule the loop
    ///
    /// Returns `false` if already active; a second loop is never stacked.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = AnimationState::Starting { since: now };
        true
    }

    /// Cancel the loop
    ///
    /// Returns `false` if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = AnimationState::Idle;
        true
    }

    /// Run one frame of the state machine
    pub fn tick(&mut self, now: Instant, angles: &mut RotationAngles) -> Tick {
        match self.state {
            AnimationState::Idle => Tick::Idle,
            AnimationState::Starting { since } => {
                if now.saturating_duration_since(since) < self.startup_delay {
                    Tick::Waiting
                } else {
                    self.state = AnimationState::Running { frames: 0 };
                    Tick::Started
                }
            }
            AnimationState::Running { frames } => {
                angles.advance(&self.speeds);
                self.state = AnimationState::Running { frames: frames + 1 };
                Tick::Advanced
            }
        }
    }

    /// Builder: set per-frame speeds
    pub fn with_speeds(mut self, speeds: RotationAngles) -> Self {
        self.speeds = speeds;
        self
    }

    /// Builder: set startup delay
    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }
}
