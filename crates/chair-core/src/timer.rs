//! Deterministic single-threaded timer queue.
//!
//! Mirrors the browser's `setTimeout`/`setInterval` model but is driven
//! explicitly: the owner calls [`TimerQueue::pop_due`] with the current clock
//! until it returns `None`. Every armed timer hands back a [`TimerId`] that
//! acts as its cancellation token; a cancelled id never fires.
//!
//! Due timers fire in deadline order, ties broken by arming order. Handlers
//! may arm or cancel timers between pops and the queue stays consistent.

use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    deadline: Duration,
    period: Option<Duration>,
    seq: u64,
    task: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: FnvHashMap<TimerId, Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            timers: FnvHashMap::default(),
        }
    }

    /// Clock value of the last fired timer or [`Self::advance_clock`] call.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        self.insert(delay, None, task)
    }

    /// Repeating timer; first fires one `period` from now. Zero periods are
    /// bumped to one millisecond so a stalled clock cannot spin forever.
    pub fn set_interval(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), task)
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn advance_clock(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.insert(
            id,
            Entry {
                deadline: self.now + delay,
                period,
                seq,
                task,
            },
        );
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn earliest_due(&self, until: Duration) -> Option<TimerId> {
        self.timers
            .iter()
            .filter(|(_, e)| e.deadline <= until)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(id, _)| *id)
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Intervals are re-armed at `deadline + period`.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let id = self.earliest_due(until)?;
        let seq = self.bump_seq();
        let entry = self.timers.get_mut(&id)?;
        self.now = self.now.max(entry.deadline);
        let task = entry.task.clone();
        match entry.period {
            Some(period) => {
                entry.deadline += period;
                entry.seq = seq;
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some((id, task))
    }
}
