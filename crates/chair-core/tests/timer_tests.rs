// Host-side tests for the deterministic timer queue.

use chair_core::TimerQueue;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn drain(q: &mut TimerQueue<&'static str>, until: Duration) -> Vec<(&'static str, Duration)> {
    let mut out = Vec::new();
    while let Some((_, task)) = q.pop_due(until) {
        out.push((task, q.now()));
    }
    q.advance_clock(until);
    out
}

#[test]
fn timeouts_fire_in_deadline_order() {
    let mut q = TimerQueue::new();
    q.set_timeout(ms(300), "c");
    q.set_timeout(ms(100), "a");
    q.set_timeout(ms(200), "b");
    let fired = drain(&mut q, ms(1_000));
    assert_eq!(
        fired,
        vec![("a", ms(100)), ("b", ms(200)), ("c", ms(300))]
    );
    assert!(q.is_empty());
    assert_eq!(q.now(), ms(1_000));
}

#[test]
fn equal_deadlines_fire_in_arming_order() {
    let mut q = TimerQueue::new();
    q.set_timeout(ms(50), "first");
    q.set_timeout(ms(50), "second");
    q.set_timeout(ms(50), "third");
    let names: Vec<_> = drain(&mut q, ms(50)).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn nothing_fires_before_its_deadline() {
    let mut q = TimerQueue::new();
    q.set_timeout(ms(100), "a");
    assert!(drain(&mut q, ms(99)).is_empty());
    assert_eq!(q.len(), 1);
    assert_eq!(drain(&mut q, ms(100)).len(), 1);
}

#[test]
fn cancelled_timer_never_fires() {
    let mut q = TimerQueue::new();
    let id = q.set_timeout(ms(100), "a");
    q.set_timeout(ms(200), "b");
    assert!(q.is_pending(id));
    assert!(q.cancel(id));
    assert!(!q.is_pending(id));
    assert!(!q.cancel(id));
    let names: Vec<_> = drain(&mut q, ms(500)).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["b"]);
}

#[test]
fn delays_are_relative_to_the_queue_clock() {
    let mut q = TimerQueue::new();
    q.advance_clock(ms(1_000));
    q.set_timeout(ms(10), "a");
    assert!(drain(&mut q, ms(1_009)).is_empty());
    assert_eq!(drain(&mut q, ms(1_010)), vec![("a", ms(1_010))]);
}

#[test]
fn clock_never_moves_backwards() {
    let mut q: TimerQueue<&str> = TimerQueue::new();
    q.advance_clock(ms(500));
    q.advance_clock(ms(100));
    assert_eq!(q.now(), ms(500));
}

#[test]
fn interval_repeats_until_cancelled() {
    let mut q = TimerQueue::new();
    let id = q.set_interval(ms(40), "tick");
    let fired = drain(&mut q, ms(130));
    assert_eq!(
        fired,
        vec![("tick", ms(40)), ("tick", ms(80)), ("tick", ms(120))]
    );
    assert!(q.is_pending(id));
    q.cancel(id);
    assert!(drain(&mut q, ms(1_000)).is_empty());
}

#[test]
fn interval_interleaves_with_timeouts() {
    let mut q = TimerQueue::new();
    q.set_interval(ms(30), "tick");
    q.set_timeout(ms(45), "once");
    let names: Vec<_> = drain(&mut q, ms(90)).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["tick", "once", "tick", "tick"]);
}

#[test]
fn zero_period_interval_does_not_spin() {
    let mut q = TimerQueue::new();
    q.set_interval(Duration::ZERO, "tick");
    assert_eq!(drain(&mut q, ms(5)).len(), 5);
}

#[test]
fn clear_drops_everything() {
    let mut q = TimerQueue::new();
    q.set_timeout(ms(1), "a");
    q.set_interval(ms(1), "b");
    q.clear();
    assert!(q.is_empty());
    assert!(drain(&mut q, ms(100)).is_empty());
}
