//! The configurator session: single owner and single writer of the product
//! config, the idle machinery and the preset transition.
//!
//! Front-ends hold one `Session`, feed it intents and a monotonic clock via
//! [`Session::advance`], and read the resulting state. Every operation takes
//! the clock reading of the input that caused it, fires whatever came due
//! before that instant, then applies itself, so timers are always armed from
//! the moment of the input even if no frame ran for a while. Operations return
//! the [`SessionEvent`]s they produced so consumers can refresh incrementally.
//! Requests whose preconditions fail are ignored without an error.

use crate::catalog::{find_preset, ChairPart, HexColor, MaterialType, View};
use crate::config::ProductConfig;
use crate::constants::{IDLE_TIMEOUT, TRANSITION_ENTER, TRANSITION_EXIT, VIEW_INTERVAL};
use crate::idle::{ActivityKind, IdlePhase, IdleState, IdleTimer};
use crate::timer::TimerQueue;
use crate::transition::{TransitionDirection, TransitionSequencer, TransitionState};
use smallvec::SmallVec;
use std::time::Duration;

/// Work scheduled on the session's timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    IdleTimeout,
    ViewCycle,
    TransitionSwap,
    TransitionEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    IntroCompleted,
    IdleChanged(bool),
    ViewChanged(View),
    /// Colors, material, active part or active preset changed.
    ConfigChanged,
    TransitionChanged(Option<TransitionDirection>),
}

pub type Events = SmallVec<[SessionEvent; 4]>;

/// Durations driving the idle and transition timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub idle_timeout: Duration,
    pub view_interval: Duration,
    pub transition_exit: Duration,
    pub transition_enter: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            idle_timeout: IDLE_TIMEOUT,
            view_interval: VIEW_INTERVAL,
            transition_exit: TRANSITION_EXIT,
            transition_enter: TRANSITION_ENTER,
        }
    }
}

pub struct Session {
    config: ProductConfig,
    idle: IdleTimer,
    transition: TransitionSequencer,
    timers: TimerQueue<Task>,
    disposed: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl Session {
    pub fn new(timings: Timings) -> Self {
        Self::with_config(ProductConfig::default(), timings)
    }

    pub fn with_config(config: ProductConfig, timings: Timings) -> Self {
        Self {
            idle: IdleTimer::new(timings.idle_timeout, timings.view_interval, config.view),
            transition: TransitionSequencer::new(
                timings.transition_exit,
                timings.transition_enter,
            ),
            config,
            timers: TimerQueue::new(),
            disposed: false,
        }
    }

    pub fn config(&self) -> &ProductConfig {
        &self.config
    }

    pub fn idle_state(&self) -> IdleState {
        self.idle.state()
    }

    pub fn idle_phase(&self) -> IdlePhase {
        self.idle.phase()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition.state()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Session clock as last seen by the timer queue.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The intro animation finished; the idle machinery starts watching.
    pub fn intro_complete(&mut self, now: Duration) -> Events {
        let mut events = Events::new();
        if self.disposed {
            return events;
        }
        self.catch_up(now, &mut events);
        if self.idle.activate(&mut self.timers) {
            log::info!("[idle] intro complete, watching for inactivity");
            events.push(SessionEvent::IntroCompleted);
        }
        events
    }

    pub fn user_activity(&mut self, kind: ActivityKind, now: Duration) -> Events {
        let mut events = Events::new();
        if self.disposed {
            return events;
        }
        self.catch_up(now, &mut events);
        self.note_activity(kind, &mut events);
        events
    }

    pub fn set_active_part(&mut self, part: ChairPart, now: Duration) -> Events {
        self.edit(now, |config| config.set_active_part(part))
    }

    /// Colors the active part and switches the preset identity to `custom`.
    pub fn set_color(&mut self, color: HexColor, now: Duration) -> Events {
        self.edit(now, |config| config.set_color(color))
    }

    pub fn set_material(&mut self, material: MaterialType, now: Duration) -> Events {
        self.edit(now, |config| config.set_material(material))
    }

    pub fn set_view(&mut self, view: View, now: Duration) -> Events {
        let mut events = Events::new();
        if self.disposed {
            return events;
        }
        self.catch_up(now, &mut events);
        self.note_activity(ActivityKind::PointerDown, &mut events);
        self.idle.sync_cursor(view);
        if self.config.view != view {
            self.config.set_view(view);
            events.push(SessionEvent::ViewChanged(view));
        }
        events
    }

    /// Starts the exit -> swap -> enter sequence towards `preset_id`.
    ///
    /// Ignored when the preset is already active, a transition is running, or
    /// the id is not in the catalog.
    pub fn request_preset_change(&mut self, preset_id: &str, now: Duration) -> Events {
        let mut events = Events::new();
        if self.disposed {
            return events;
        }
        self.catch_up(now, &mut events);
        if self.config.active_preset.is(preset_id) || self.transition.is_transitioning() {
            log::debug!("[preset] ignoring request for `{preset_id}`");
            return events;
        }
        let Some(preset) = find_preset(preset_id) else {
            log::debug!("[preset] unknown preset `{preset_id}`");
            return events;
        };
        self.note_activity(ActivityKind::PointerDown, &mut events);
        if self.transition.begin(preset, &mut self.timers) {
            log::info!("[preset] transition to `{}` started", preset.id);
            events.push(SessionEvent::TransitionChanged(Some(TransitionDirection::Out)));
        }
        events
    }

    /// Fires every timer due at or before `now`, in deadline order.
    pub fn advance(&mut self, now: Duration) -> Events {
        let mut events = Events::new();
        if self.disposed {
            return events;
        }
        self.catch_up(now, &mut events);
        events
    }

    /// Cancels every pending timer; the session ignores all later calls.
    pub fn shutdown(&mut self) {
        if self.disposed {
            return;
        }
        self.idle.cancel(&mut self.timers);
        self.transition.cancel(&mut self.timers);
        self.timers.clear();
        self.disposed = true;
        log::info!("[session] shut down");
    }

    fn catch_up(&mut self, now: Duration, events: &mut Events) {
        while let Some((id, task)) = self.timers.pop_due(now) {
            match task {
                Task::IdleTimeout => {
                    if self.idle.on_quiet_elapsed(id, &mut self.timers) {
                        log::info!("[idle] no input for a while, auto-rotating views");
                        events.push(SessionEvent::IdleChanged(true));
                    }
                }
                Task::ViewCycle => {
                    if let Some(view) = self.idle.on_cycle_tick(id) {
                        log::debug!("[idle] cycling to {}", view.as_str());
                        self.config.set_view(view);
                        events.push(SessionEvent::ViewChanged(view));
                    }
                }
                Task::TransitionSwap => {
                    if let Some(preset) = self.transition.on_exit_elapsed(id, &mut self.timers) {
                        self.config.apply_preset(preset);
                        events.push(SessionEvent::ConfigChanged);
                        events.push(SessionEvent::TransitionChanged(Some(
                            TransitionDirection::In,
                        )));
                    }
                }
                Task::TransitionEnd => {
                    if self.transition.on_enter_elapsed(id) {
                        log::info!("[preset] transition finished");
                        events.push(SessionEvent::TransitionChanged(None));
                    }
                }
            }
        }
        self.timers.advance_clock(now);
    }

    fn edit(&mut self, now: Duration, apply: impl FnOnce(&mut ProductConfig)) -> Events {
        let mut events = Events::new();
        if self.disposed {
            return events;
        }
        self.catch_up(now, &mut events);
        self.note_activity(ActivityKind::PointerDown, &mut events);
        let before = self.config;
        apply(&mut self.config);
        if self.config != before {
            events.push(SessionEvent::ConfigChanged);
        }
        events
    }

    fn note_activity(&mut self, kind: ActivityKind, events: &mut Events) {
        if self.idle.on_activity(&mut self.timers) {
            log::debug!("[idle] resumed by {}", kind.event_type());
            events.push(SessionEvent::IdleChanged(false));
        }
    }
}
