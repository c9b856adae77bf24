//! Fixed-rate tick scheduling
//!
//! Display frames arrive at whatever rate the host refreshes. Elapsed time is
//! accumulated and drained in whole simulation steps, so the simulation runs
//! at a constant cadence regardless of frame rate.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    /// Duration of one tick (ms)
    step_ms: f64,
    /// Time owed to the simulation (ms)
    accumulator: f64,
    /// Timestamp of the previous frame
    last_time: Option<f64>,
    max_substeps: u32,
    running: bool,
}

impl FixedRateScheduler {
    /// Scheduler firing `tick_rate` times per second
    pub fn new(tick_rate: f64) -> Self {
        Self {
            step_ms: 1000.0 / tick_rate,
            accumulator: 0.0,
            last_time: None,
            max_substeps: MAX_SUBSTEPS,
            running: true,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step_ms
    }

    /// Account for a display frame at `now_ms` and run every tick that is due.
    ///
    /// Ticks run synchronously and in order, so two ticks never overlap.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, now_ms: f64, mut on_tick: impl FnMut()) -> u32 {
        if !self.running {
            return 0;
        }

        // First frame counts as one step; clock jumps are clamped
        let dt = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => self.step_ms,
        };
        self.last_time = Some(now_ms);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step_ms && substeps < self.max_substeps {
            on_tick();
            self.accumulator -= self.step_ms;
            substeps += 1;
        }

        // Catch up no further than the substep cap allows
        if self.accumulator >= self.step_ms {
            let dropped = self.accumulator - self.accumulator % self.step_ms;
            log::debug!("Scheduler behind, dropping {:.1}ms", dropped);
            self.accumulator %= self.step_ms;
        }

        substeps
    }

    /// Tear down: no further ticks will be scheduled
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Scheduler stopped");
        }
        self.running = false;
        self.accumulator = 0.0;
    }
}
