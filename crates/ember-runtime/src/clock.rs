//! Fixed-timestep game loop

use log::warn;

/// Default simulation step: 60 updates per second, in milliseconds
pub const DEFAULT_FIXED_STEP_MS: f64 = 1000.0 / 60.0;

/// Upper bound on the wall-time credited to a single host frame.
///
/// A long host stall (window in background, debugger pause) otherwise grows
/// the accumulator without bound and produces a burst of catch-up updates on
/// resume. Excess time beyond this bound is dropped.
pub const MAX_FRAME_MS: f64 = 250.0;

// Repeated subtraction of a non-representable step (1000/60) leaves an f64
// residue a hair under the step; within this tolerance it counts as a full
// step so a frame carrying exactly N steps fires N updates
const STEP_EPSILON: f64 = 1e-6;

/// Hooks invoked by the loop each host frame: `update` once per drained
/// fixed step, `render` exactly once afterwards.
pub trait FrameHooks {
    /// Advance simulation by one fixed step. `delta` is always exactly the
    /// loop's fixed step.
    fn update(&mut self, delta: f64);

    /// Paint the current state. Runs once per host frame regardless of how
    /// many updates fired.
    fn render(&mut self);
}

/// Drives simulation at a fixed rate decoupled from the host's variable
/// frame timing.
///
/// The host calls [`GameLoop::frame`] once per display frame with the
/// current timestamp. Elapsed wall time is accumulated and drained in
/// `fixed_step` increments through the [`FrameHooks`].
pub struct GameLoop {
    fixed_step: f64,
    accumulated: f64,
    last_frame_time: f64,
    running: bool,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLoop {
    /// Create a loop with the default 60 Hz fixed step
    pub fn new() -> Self {
        Self::with_fixed_step(DEFAULT_FIXED_STEP_MS)
    }

    /// Create a loop with a custom fixed step in milliseconds
    pub fn with_fixed_step(fixed_step: f64) -> Self {
        Self {
            fixed_step,
            accumulated: 0.0,
            last_frame_time: 0.0,
            running: false,
        }
    }

    /// The fixed step in milliseconds
    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the loop at the given timestamp.
    ///
    /// Resets the frame clock to `now_ms`, so restarting after a `stop` does
    /// not credit the stopped interval as a giant delta.
    pub fn start(&mut self, now_ms: f64) {
        if !self.running {
            self.running = true;
            self.last_frame_time = now_ms;
        }
    }

    /// Stop the loop. Idempotent; subsequent `frame` calls are no-ops until
    /// the next `start`, so no hook fires after this returns.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one host frame at timestamp `now_ms` (milliseconds, any
    /// monotonic origin). A stopped loop does nothing.
    pub fn frame(&mut self, now_ms: f64, hooks: &mut dyn FrameHooks) {
        if !self.running {
            return;
        }

        let elapsed = now_ms - self.last_frame_time;
        if elapsed > MAX_FRAME_MS {
            warn!("host frame took {elapsed:.0}ms; clamping to {MAX_FRAME_MS}ms");
        }
        let delta = elapsed.clamp(0.0, MAX_FRAME_MS);
        self.last_frame_time = now_ms;
        self.accumulated += delta;

        while self.accumulated + STEP_EPSILON >= self.fixed_step {
            hooks.update(self.fixed_step);
            self.accumulated = (self.accumulated - self.fixed_step).max(0.0);
        }

        hooks.render();
    }
}
