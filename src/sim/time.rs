//! Fixed timestep and periodic triggers, in whole milliseconds

/// Turns variable host frame time into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step_ms: u32,
    max_steps: u32,
    accumulator_ms: u32,
}

impl FixedTimestep {
    pub fn new(step_ms: u32, max_steps: u32) -> Self {
        Self {
            step_ms,
            max_steps,
            accumulator_ms: 0,
        }
    }

    /// Add frame time. Returns the number of ticks to run.
    pub fn accumulate(&mut self, frame_ms: u32) -> u32 {
        // Cap the backlog so a long stall doesn't replay seconds of ticks
        self.accumulator_ms = self
            .accumulator_ms
            .saturating_add(frame_ms)
            .min(self.step_ms.saturating_mul(self.max_steps));
        let steps = self.accumulator_ms / self.step_ms;
        self.accumulator_ms -= steps * self.step_ms;
        steps
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }
}

/// Fires once every `period_ms` of advanced time
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl IntervalTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0,
        }
    }

    /// Advance the timer. Returns how many times it fired.
    pub fn advance(&mut self, dt_ms: u32) -> u32 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let fired = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
