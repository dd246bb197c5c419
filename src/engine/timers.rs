/// Logical milliseconds since the engine was created.
pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// What a timer owned by the dashboard is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPurpose {
    StreamTick,
    NoticeExpiry,
    TransitionEnd,
}

pub type Timers = TimerQueue<TimerPurpose>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub at: Millis,
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    handle: TimerHandle,
    due: Millis,
    every: Option<Millis>,
    payload: T,
}

/// Single-threaded timer queue on a logical clock.
///
/// Due timers are handed out one at a time in deadline order (ties in
/// scheduling order), and the clock is moved to each deadline as it fires so a
/// handler that schedules a new timer measures from the moment it ran.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Millis,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<T: Copy> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn schedule_once(&mut self, delay: Millis, payload: T) -> TimerHandle {
        self.push(delay, None, payload)
    }

    /// Fires every `every` ms until cancelled. A zero interval is clamped to 1ms
    /// so a single `advance` can never spin forever.
    pub fn schedule_repeating(&mut self, every: Millis, payload: T) -> TimerHandle {
        let every = every.max(1);
        self.push(every, Some(every), payload)
    }

    fn push(&mut self, delay: Millis, every: Option<Millis>, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due: self.now.saturating_add(delay),
            every,
            payload,
        });
        handle
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn deadline(&self, handle: TimerHandle) -> Option<Millis> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.due)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to its
    /// deadline. Repeating timers are re-armed before being returned.
    pub fn next_due(&mut self, until: Millis) -> Option<Fired<T>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.handle))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[idx];
        let fired = Fired {
            handle: entry.handle,
            at: entry.due,
            payload: entry.payload,
        };
        self.now = self.now.max(entry.due);
        match entry.every {
            Some(every) => entry.due = entry.due.saturating_add(every),
            None => {
                self.entries.remove(idx);
            }
        }
        Some(fired)
    }

    /// Moves the clock forward to `until` once every due timer has been drained.
    pub fn settle(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}

/// A restartable one-shot timer slot: at most one deadline is live at a time.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct OneShot {
    handle: Option<TimerHandle>,
}

impl OneShot {
    pub(crate) fn restart(&mut self, timers: &mut Timers, delay: Millis, purpose: TimerPurpose) {
        self.cancel(timers);
        self.handle = Some(timers.schedule_once(delay, purpose));
    }

    pub(crate) fn cancel(&mut self, timers: &mut Timers) {
        if let Some(h) = self.handle.take() {
            timers.cancel(h);
        }
    }

    /// Consumes the slot if `handle` is the live deadline; stale handles are ignored.
    pub(crate) fn take_if(&mut self, handle: TimerHandle) -> bool {
        if self.handle == Some(handle) {
            self.handle = None;
            return true;
        }
        false
    }

    pub(crate) fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }
}

#[cfg(test)]
#[path = "../tests/engine/timers_tests.rs"]
mod tests;
