//! One-shot sleep timer.
//!
//! The timer is polled by the event loop; once its deadline passes it fires
//! exactly once and becomes inactive. A running timer cannot be restarted
//! or cancelled.

use std::time::{Duration, Instant};

use crate::error::MixerError;

#[derive(Debug, Clone)]
pub struct SleepTimer {
    minutes: u32,
    step: u32,
    max: u32,
    deadline: Option<Instant>,
}

impl SleepTimer {
    pub fn new(minutes: u32, step: u32, max: u32) -> Self {
        Self {
            minutes: minutes.min(max),
            step: step.max(1),
            max,
            deadline: None,
        }
    }

    /// Selected duration in minutes. Changing it does not move a running deadline.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn max_minutes(&self) -> u32 {
        self.max
    }

    pub fn increase(&mut self) {
        self.minutes = self.minutes.saturating_add(self.step).min(self.max);
    }

    pub fn decrease(&mut self) {
        self.minutes = self.minutes.saturating_sub(self.step);
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the timer for `minutes` from `now`.
    pub fn start(&mut self, now: Instant) -> Result<(), MixerError> {
        if self.deadline.is_some() {
            return Err(MixerError::TimerActive);
        }
        if self.minutes == 0 {
            return Err(MixerError::TimerUnset);
        }
        self.deadline = Some(now + Duration::from_secs(u64::from(self.minutes) * 60));
        Ok(())
    }

    /// Return true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the timer fires, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
