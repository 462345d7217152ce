//! Virtual-clock timer scheduler.
//!
//! The clock is explicit: callers drive it with `advance`, and due timers
//! fire deterministically in deadline order (registration order breaks
//! ties). Nothing fires unless the clock is advanced, so a game run is
//! replayable step by step.
//!
//! The scheduler is agnostic of what its timers mean. Callers attach a
//! `Copy` tag to each entry and interpret it when the timer fires.

/// Handle to a scheduled timer, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A timer that came due during `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired<K> {
    /// The timer's handle.
    pub id: TimerId,
    /// The caller-supplied tag.
    pub kind: K,
    /// Clock value at which the timer fired, in seconds.
    pub at: u64,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    id: TimerId,
    deadline: u64,
    period: Option<u64>,
    kind: K,
}

/// Deterministic timer queue over a virtual monotonic clock.
#[derive(Clone, Debug)]
pub struct Scheduler<K> {
    now: u64,
    next_id: u64,
    entries: Vec<Entry<K>>,
}

impl<K: Copy> Scheduler<K> {
    /// Create an empty scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current clock value in seconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule a one-shot timer `delay` seconds from now.
    pub fn schedule_once(&mut self, delay: u64, kind: K) -> TimerId {
        self.push_entry(delay, None, kind)
    }

    /// Schedule a repeating timer firing every `period` seconds, first in
    /// `period` seconds. `period` must be non-zero.
    pub fn schedule_repeating(&mut self, period: u64, kind: K) -> TimerId {
        assert!(period > 0, "repeating timer period must be non-zero");
        self.push_entry(period, Some(period), kind)
    }

    /// Cancel a timer. Returns false if it already fired or was canceled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether a timer is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Fire the next timer due at or before `target`, moving the clock to
    /// its deadline. Returns `None` when nothing is due.
    ///
    /// Firing one timer at a time lets the caller handle it and schedule
    /// new timers before the next one fires, the way a cooperative event
    /// queue would. Finish the window with `set_now(target)` once this
    /// returns `None`.
    pub fn fire_next(&mut self, target: u64) -> Option<Fired<K>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= target)
            .min_by_key(|(_, e)| (e.deadline, e.id.0))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[index];
        self.now = entry.deadline;
        let fired = Fired {
            id: entry.id,
            kind: entry.kind,
            at: entry.deadline,
        };

        match entry.period {
            Some(period) => entry.deadline += period,
            None => {
                self.entries.remove(index);
            }
        }

        Some(fired)
    }

    /// Move the clock forward to `target`. The clock never goes backward.
    pub fn set_now(&mut self, target: u64) {
        assert!(target >= self.now, "clock must be monotonic");
        self.now = target;
    }

    /// Advance the clock by `seconds`, collecting every timer that comes
    /// due, in firing order. Repeating timers re-arm with the same id and
    /// may fire multiple times within one call.
    ///
    /// Convenience over `fire_next`; timers scheduled while the collected
    /// batch is being handled only fire in a later window.
    pub fn advance(&mut self, seconds: u64) -> Vec<Fired<K>> {
        let target = self.now + seconds;
        let mut fired = Vec::new();
        while let Some(f) = self.fire_next(target) {
            fired.push(f);
        }
        self.set_now(target);
        fired
    }

    fn push_entry(&mut self, delay: u64, period: Option<u64>, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: self.now + delay,
            period,
            kind,
        });
        id
    }
}

impl<K: Copy> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
