//! Idle detection and auto-rotate.
//!
//! Nothing is armed until the intro animation reports completion. After that
//! every qualifying input rearms a full quiet period; when it runs out the
//! view starts cycling through [`VIEW_ORDER`] until the next input.

use crate::catalog::{View, VIEW_ORDER};
use crate::session::Task;
use crate::timer::{TimerId, TimerQueue};
use std::time::Duration;

/// Input kinds that count as user activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    PointerDown,
    PointerMove,
    KeyDown,
    TouchStart,
    Wheel,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::PointerDown,
        ActivityKind::PointerMove,
        ActivityKind::KeyDown,
        ActivityKind::TouchStart,
        ActivityKind::Wheel,
    ];

    /// DOM event type listened for on the window.
    pub fn event_type(self) -> &'static str {
        match self {
            ActivityKind::PointerDown => "pointerdown",
            ActivityKind::PointerMove => "pointermove",
            ActivityKind::KeyDown => "keydown",
            ActivityKind::TouchStart => "touchstart",
            ActivityKind::Wheel => "wheel",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdlePhase {
    /// Intro still playing; no timers armed.
    Inactive,
    /// Quiet timer armed.
    Active,
    /// Cycling views.
    Idle,
}

/// Snapshot exposed to readers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleState {
    pub is_idle: bool,
    pub current_view_index: usize,
}

#[derive(Debug)]
pub struct IdleTimer {
    phase: IdlePhase,
    cursor: usize,
    quiet: Option<TimerId>,
    cycle: Option<TimerId>,
    quiet_period: Duration,
    view_period: Duration,
}

impl IdleTimer {
    pub fn new(quiet_period: Duration, view_period: Duration, initial_view: View) -> Self {
        Self {
            phase: IdlePhase::Inactive,
            cursor: initial_view.cycle_index(),
            quiet: None,
            cycle: None,
            quiet_period,
            view_period,
        }
    }

    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    pub fn state(&self) -> IdleState {
        IdleState {
            is_idle: self.phase == IdlePhase::Idle,
            current_view_index: self.cursor,
        }
    }

    /// Inactive -> Active. Returns `false` if already activated.
    pub fn activate(&mut self, timers: &mut TimerQueue<Task>) -> bool {
        if self.phase != IdlePhase::Inactive {
            return false;
        }
        self.phase = IdlePhase::Active;
        self.arm_quiet(timers);
        true
    }

    /// Debounces the quiet period. Returns `true` when this input ended an
    /// idle spell.
    pub fn on_activity(&mut self, timers: &mut TimerQueue<Task>) -> bool {
        if self.phase == IdlePhase::Inactive {
            return false;
        }
        let was_idle = self.phase == IdlePhase::Idle;
        if let Some(id) = self.cycle.take() {
            timers.cancel(id);
        }
        self.phase = IdlePhase::Active;
        self.arm_quiet(timers);
        was_idle
    }

    /// Active -> Idle when `id` is the live quiet timer.
    pub fn on_quiet_elapsed(&mut self, id: TimerId, timers: &mut TimerQueue<Task>) -> bool {
        if self.quiet != Some(id) || self.phase != IdlePhase::Active {
            return false;
        }
        self.quiet = None;
        self.phase = IdlePhase::Idle;
        if let Some(old) = self.cycle.take() {
            timers.cancel(old);
        }
        self.cycle = Some(timers.set_interval(self.view_period, Task::ViewCycle));
        true
    }

    /// Advances the cursor; returns the view to show.
    pub fn on_cycle_tick(&mut self, id: TimerId) -> Option<View> {
        if self.cycle != Some(id) || self.phase != IdlePhase::Idle {
            return None;
        }
        self.cursor = (self.cursor + 1) % VIEW_ORDER.len();
        Some(VIEW_ORDER[self.cursor])
    }

    /// Keeps the cycle position in step with manual navigation.
    pub fn sync_cursor(&mut self, view: View) {
        self.cursor = view.cycle_index();
    }

    pub fn cancel(&mut self, timers: &mut TimerQueue<Task>) {
        for id in [self.quiet.take(), self.cycle.take()].into_iter().flatten() {
            timers.cancel(id);
        }
    }

    fn arm_quiet(&mut self, timers: &mut TimerQueue<Task>) {
        if let Some(old) = self.quiet.take() {
            timers.cancel(old);
        }
        self.quiet = Some(timers.set_timeout(self.quiet_period, Task::IdleTimeout));
    }
}
