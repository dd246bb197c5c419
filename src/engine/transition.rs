use super::timers::{Millis, OneShot, TimerHandle, TimerPurpose, Timers};

/// Short "loading" window raised on every route change.
#[derive(Debug)]
pub struct TransitionGate {
    duration: Millis,
    loading: bool,
    timer: OneShot,
}

impl TransitionGate {
    pub fn new(duration: Millis) -> Self {
        Self {
            duration,
            loading: false,
            timer: OneShot::default(),
        }
    }

    pub fn begin(&mut self, timers: &mut Timers) {
        if self.duration == 0 {
            return;
        }
        self.loading = true;
        self.timer.restart(timers, self.duration, TimerPurpose::TransitionEnd);
    }

    pub fn finish(&mut self, handle: TimerHandle) -> bool {
        if !self.timer.take_if(handle) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn cancel(&mut self, timers: &mut Timers) {
        self.timer.cancel(timers);
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
#[path = "../tests/engine/transition_tests.rs"]
mod tests;
