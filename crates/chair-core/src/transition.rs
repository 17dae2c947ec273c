//! Two-phase preset transition: exit, swap the data, enter.
//!
//! While a transition is in flight further preset requests are refused.
//! Other config edits are not gated here.

use crate::catalog::ChairPreset;
use crate::session::Task;
use crate::timer::{TimerId, TimerQueue};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDirection {
    /// Old configuration leaving the stage.
    Out,
    /// New configuration arriving.
    In,
}

impl TransitionDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionDirection::Out => "out",
            TransitionDirection::In => "in",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionState {
    pub is_transitioning: bool,
    pub direction: Option<TransitionDirection>,
    pub pending_preset: Option<&'static str>,
}

#[derive(Debug)]
pub struct TransitionSequencer {
    direction: Option<TransitionDirection>,
    pending: Option<&'static ChairPreset>,
    timer: Option<TimerId>,
    exit: Duration,
    enter: Duration,
}

impl TransitionSequencer {
    pub fn new(exit: Duration, enter: Duration) -> Self {
        Self {
            direction: None,
            pending: None,
            timer: None,
            exit,
            enter,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> TransitionState {
        TransitionState {
            is_transitioning: self.is_transitioning(),
            direction: self.direction,
            pending_preset: self.pending.map(|p| p.id),
        }
    }

    /// Starts the exit phase. Refused while another transition runs.
    pub fn begin(&mut self, preset: &'static ChairPreset, timers: &mut TimerQueue<Task>) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.pending = Some(preset);
        self.direction = Some(TransitionDirection::Out);
        self.timer = Some(timers.set_timeout(self.exit, Task::TransitionSwap));
        true
    }

    /// Exit phase over: flips to `In`, arms the entry timer and hands back the
    /// preset to apply.
    pub fn on_exit_elapsed(
        &mut self,
        id: TimerId,
        timers: &mut TimerQueue<Task>,
    ) -> Option<&'static ChairPreset> {
        if self.timer != Some(id) || self.direction != Some(TransitionDirection::Out) {
            return None;
        }
        let preset = self.pending?;
        self.direction = Some(TransitionDirection::In);
        self.timer = Some(timers.set_timeout(self.enter, Task::TransitionEnd));
        Some(preset)
    }

    /// Entry phase over: back to rest.
    pub fn on_enter_elapsed(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) || self.direction != Some(TransitionDirection::In) {
            return false;
        }
        self.reset();
        true
    }

    pub fn cancel(&mut self, timers: &mut TimerQueue<Task>) {
        if let Some(id) = self.timer {
            timers.cancel(id);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.direction = None;
        self.pending = None;
        self.timer = None;
    }
}
