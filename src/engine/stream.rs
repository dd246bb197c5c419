use serde::Serialize;

use super::timers::{Millis, TimerHandle, TimerPurpose, Timers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogColor {
    Blue,
    Yellow,
    Red,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub time: &'static str,
    pub level: LogLevel,
    pub message: &'static str,
    pub color: LogColor,
}

impl LogEntry {
    pub fn render_plain(&self) -> String {
        format!("{} [{}] {}", self.time, self.level.as_str(), self.message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamPhase {
    Idle,
    Streaming,
    Finished,
}

/// Scroll window over the displayed log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogViewport {
    offset: usize,
    height: usize,
}

impl Default for LogViewport {
    fn default() -> Self {
        Self {
            offset: 0,
            height: 16,
        }
    }
}

impl LogViewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn follow_tail(&mut self, len: usize) {
        self.offset = len.saturating_sub(self.height);
    }

    pub fn resize(&mut self, height: usize, len: usize) {
        let height = height.max(1);
        if height == self.height {
            return;
        }
        self.height = height;
        self.follow_tail(len);
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, len: usize) {
        let max = len.saturating_sub(self.height);
        self.offset = (self.offset + 1).min(max);
    }

    pub fn visible(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = (start + self.height).min(len);
        start..end
    }

    pub fn shows(&self, index: usize, len: usize) -> bool {
        self.visible(len).contains(&index)
    }
}

/// Replays a fixed log fixture onto a growing display log.
///
/// `displayed` is always `fixture[..cursor]`; the repeating timer is owned here
/// and cancelled on finish or stop.
#[derive(Debug)]
pub struct StreamPlayer {
    fixture: &'static [LogEntry],
    interval: Millis,
    displayed: Vec<LogEntry>,
    phase: StreamPhase,
    timer: Option<TimerHandle>,
    viewport: LogViewport,
}

impl StreamPlayer {
    pub fn new(fixture: &'static [LogEntry], interval: Millis) -> Self {
        Self {
            fixture,
            interval,
            displayed: Vec::new(),
            phase: StreamPhase::Idle,
            timer: None,
            viewport: LogViewport::default(),
        }
    }

    pub fn start(&mut self, timers: &mut Timers) {
        self.stop(timers);
        self.displayed.clear();
        self.viewport.follow_tail(0);
        if self.fixture.is_empty() {
            self.phase = StreamPhase::Finished;
            return;
        }
        self.phase = StreamPhase::Streaming;
        self.timer = Some(timers.schedule_repeating(self.interval, TimerPurpose::StreamTick));
        tracing::debug!(
            entries = self.fixture.len(),
            interval_ms = self.interval,
            "log stream started"
        );
    }

    /// Appends the next entry. Returns true if the timer belonged to this player.
    pub fn tick(&mut self, timers: &mut Timers, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) || self.phase != StreamPhase::Streaming {
            return false;
        }
        if let Some(entry) = self.fixture.get(self.displayed.len()) {
            self.displayed.push(*entry);
            self.viewport.follow_tail(self.displayed.len());
        }
        if self.displayed.len() == self.fixture.len() {
            if let Some(h) = self.timer.take() {
                timers.cancel(h);
            }
            self.phase = StreamPhase::Finished;
            tracing::debug!(entries = self.displayed.len(), "log stream finished");
        }
        true
    }

    /// Cancels the timer without touching what is displayed. A partial run drops
    /// back to idle; a finished one stays finished.
    pub fn stop(&mut self, timers: &mut Timers) {
        if let Some(h) = self.timer.take() {
            timers.cancel(h);
            tracing::debug!(cursor = self.cursor(), "log stream cancelled");
        }
        if self.phase != StreamPhase::Finished {
            self.phase = StreamPhase::Idle;
        }
    }

    pub fn replay(&mut self, timers: &mut Timers) {
        self.start(timers);
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == StreamPhase::Finished
    }

    pub fn cursor(&self) -> usize {
        self.displayed.len()
    }

    pub fn displayed(&self) -> &[LogEntry] {
        &self.displayed
    }

    pub fn fixture_len(&self) -> usize {
        self.fixture.len()
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn viewport(&self) -> &LogViewport {
        &self.viewport
    }

    pub fn resize_viewport(&mut self, height: usize) {
        self.viewport.resize(height, self.displayed.len());
    }

    pub fn scroll_up(&mut self) {
        self.viewport.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.viewport.scroll_down(self.displayed.len());
    }

    pub fn newest_visible(&self) -> bool {
        match self.displayed.len() {
            0 => true,
            n => self.viewport.shows(n - 1, n),
        }
    }

    pub fn export_lines(&self) -> Vec<String> {
        self.displayed.iter().map(LogEntry::render_plain).collect()
    }
}

#[cfg(test)]
#[path = "../tests/engine/stream_tests.rs"]
mod tests;
