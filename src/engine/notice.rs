use super::timers::{Millis, OneShot, TimerHandle, TimerPurpose, Timers};

/// Auto-dismissing success notice. Showing it again restarts the countdown.
#[derive(Debug)]
pub struct Notice {
    duration: Millis,
    visible: bool,
    message: String,
    expiry: OneShot,
}

impl Notice {
    pub fn new(duration: Millis) -> Self {
        Self {
            duration,
            visible: false,
            message: String::new(),
            expiry: OneShot::default(),
        }
    }

    pub fn show(&mut self, timers: &mut Timers, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
        self.expiry.restart(timers, self.duration, TimerPurpose::NoticeExpiry);
    }

    pub fn dismiss(&mut self, timers: &mut Timers) {
        self.expiry.cancel(timers);
        self.visible = false;
    }

    /// Hides the notice if `handle` is its live deadline.
    pub fn expire(&mut self, handle: TimerHandle) -> bool {
        if !self.expiry.take_if(handle) {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&str> {
        self.visible.then_some(self.message.as_str())
    }

    pub fn expires_at(&self, timers: &Timers) -> Option<Millis> {
        self.expiry.handle().and_then(|h| timers.deadline(h))
    }
}

#[cfg(test)]
#[path = "../tests/engine/notice_tests.rs"]
mod tests;
