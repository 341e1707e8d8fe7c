//! Progress bar demo driver.
//!
//! The counter advances from 1 to 100 in unit steps, pausing one interval
//! before each step. The interactive host drives it with scheduled ticks; the
//! headless renderer uses [`ProgressTask::run_blocking`].

use crate::consts::cli_consts::PROGRESS_STEPS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ProgressTask {
    interval: Duration,
    step: u8,
    started_at: Option<Instant>,
}

impl ProgressTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            step: 0,
            started_at: None,
        }
    }

    /// Start again from zero.
    pub fn restart(&mut self, now: Instant) {
        self.step = 0;
        self.started_at = Some(now);
    }

    /// Stop ticking and forget the counter.
    pub fn cancel(&mut self) {
        self.step = 0;
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.step < PROGRESS_STEPS
    }

    pub fn percent(&self) -> u8 {
        self.step
    }

    /// When the next step becomes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.is_running() {
            return None;
        }
        let started_at = self.started_at?;
        Some(started_at + self.interval * (u32::from(self.step) + 1))
    }

    /// Emit every step that is due at `now`.
    ///
    /// A slow caller gets several steps at once, so the whole run still takes
    /// `PROGRESS_STEPS` intervals.
    pub fn advance(&mut self, now: Instant) -> Vec<u8> {
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };
        let due = if self.interval.is_zero() {
            PROGRESS_STEPS
        } else {
            let elapsed = now.saturating_duration_since(started_at);
            let steps = elapsed.as_nanos() / self.interval.as_nanos();
            steps.min(u128::from(PROGRESS_STEPS)) as u8
        };
        if due <= self.step {
            return Vec::new();
        }
        let emitted: Vec<u8> = (self.step + 1..=due).collect();
        self.step = due;
        emitted
    }

    /// Run the whole sequence on the calling thread, sleeping before each step.
    pub fn run_blocking<F: FnMut(u8)>(interval: Duration, mut on_step: F) {
        for step in 1..=PROGRESS_STEPS {
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
            on_step(step);
        }
    }
}
