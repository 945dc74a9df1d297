//! Virtual time clock for deterministic timelines.
//!
//! The newsletter lifecycle is a "do X after N ms" sequence. In the browser
//! it is played with `zoon::Timer`; here time only advances when asked to,
//! so tests can step through it instantly.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Entry for a pending one-shot timer.
#[derive(Debug, Clone)]
struct TimerEntry<T> {
    /// When the timer should fire (virtual time in ms)
    fire_at_ms: u64,
    /// Registration order, keeps same-instant timers FIFO
    seq: u64,
    payload: T,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.seq == other.seq
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earlier fire time first, then earlier registration
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Virtual time scheduler.
///
/// Tracks virtual time and hands back timer payloads as they come due.
/// Time only advances when explicitly requested via `advance_by()`.
pub struct VirtualClock<T> {
    /// Current virtual time in milliseconds
    current_time_ms: u64,
    next_seq: u64,
    /// Pending timers ordered by fire time
    pending_timers: BinaryHeap<TimerEntry<T>>,
}

impl<T> VirtualClock<T> {
    /// Create a new clock starting at time 0.
    pub fn new() -> Self {
        Self {
            current_time_ms: 0,
            next_seq: 0,
            pending_timers: BinaryHeap::new(),
        }
    }

    /// Get the current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.current_time_ms
    }

    /// Register a one-shot timer that fires `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, payload: T) {
        let fire_at_ms = self.current_time_ms + u64::from(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending_timers.push(TimerEntry {
            fire_at_ms,
            seq,
            payload,
        });
    }

    /// Register a whole timeline of `(delay_ms, payload)` steps.
    ///
    /// Delays are relative to the previous step, the way sequential
    /// `Timer::sleep(..).await` calls behave.
    pub fn schedule_timeline(&mut self, steps: impl IntoIterator<Item = (u32, T)>) {
        let mut offset_ms: u32 = 0;
        for (delay_ms, payload) in steps {
            offset_ms = offset_ms.saturating_add(delay_ms);
            self.schedule(offset_ms, payload);
        }
    }

    /// Advance virtual time by `ms`.
    ///
    /// Returns the payloads of every timer that came due, in firing order.
    pub fn advance_by(&mut self, ms: u64) -> Vec<T> {
        let target_time = self.current_time_ms + ms;
        let mut fired = Vec::new();

        while self
            .pending_timers
            .peek()
            .is_some_and(|entry| entry.fire_at_ms <= target_time)
        {
            if let Some(entry) = self.pending_timers.pop() {
                self.current_time_ms = entry.fire_at_ms;
                fired.push(entry.payload);
            }
        }

        self.current_time_ms = target_time;
        fired
    }

    /// Check if there are any pending timers.
    pub fn has_pending_timers(&self) -> bool {
        !self.pending_timers.is_empty()
    }

    /// Get the time until the next timer fires (if any).
    pub fn time_to_next_timer(&self) -> Option<u64> {
        self.pending_timers
            .peek()
            .map(|entry| entry.fire_at_ms.saturating_sub(self.current_time_ms))
    }
}

impl<T> Default for VirtualClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_once_at_deadline() {
        let mut clock = VirtualClock::new();
        clock.schedule(100, "hero");

        assert!(clock.advance_by(99).is_empty());
        assert_eq!(clock.advance_by(1), vec!["hero"]);
        assert!(clock.advance_by(1000).is_empty());
        assert!(!clock.has_pending_timers());
    }

    #[test]
    fn same_instant_timers_fire_in_registration_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(100, 1);
        clock.schedule(100, 2);
        clock.schedule(50, 0);

        assert_eq!(clock.advance_by(100), vec![0, 1, 2]);
    }

    #[test]
    fn timeline_delays_are_cumulative() {
        let mut clock = VirtualClock::new();
        clock.schedule_timeline([(1500, "joined"), (3000, "restored")]);

        assert_eq!(clock.time_to_next_timer(), Some(1500));
        assert_eq!(clock.advance_by(1500), vec!["joined"]);
        assert_eq!(clock.time_to_next_timer(), Some(3000));
        assert!(clock.advance_by(2999).is_empty());
        assert_eq!(clock.advance_by(1), vec!["restored"]);
        assert_eq!(clock.now_ms(), 4500);
    }

    #[test]
    fn time_to_next_timer() {
        let mut clock = VirtualClock::new();
        assert!(clock.time_to_next_timer().is_none());

        clock.schedule(1000, ());
        assert_eq!(clock.time_to_next_timer(), Some(1000));

        clock.advance_by(300);
        assert_eq!(clock.time_to_next_timer(), Some(700));
    }
}
