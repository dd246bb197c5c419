use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::engine::{LogColor, LogEntry, StreamPhase, StreamPlayer};

use super::super::{RenderCtx, View, render_view_chrome};

pub(in crate::tui_shell) struct LogsView<'a> {
    pub(in crate::tui_shell) player: &'a StreamPlayer,
}

fn level_color(color: LogColor) -> Color {
    match color {
        LogColor::Blue => Color::Blue,
        LogColor::Yellow => Color::Yellow,
        LogColor::Red => Color::Red,
        LogColor::Green => Color::Green,
    }
}

fn entry_line(entry: &LogEntry, base: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(entry.time, base.fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", entry.level.as_str()),
            base.fg(level_color(entry.color)).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(entry.message, base.fg(Color::White)),
    ])
}

/// The blinking marker trails the log once the whole feed is shown.
fn shows_cursor(player: &StreamPlayer) -> bool {
    player.is_finished() && player.newest_visible()
}

impl View for LogsView<'_> {
    fn title(&self) -> &str {
        "Server Logs"
    }

    fn subtitle(&self) -> String {
        let state = match self.player.phase() {
            StreamPhase::Idle => "idle",
            StreamPhase::Streaming => "live",
            StreamPhase::Finished => "complete",
        };
        format!(
            "{}/{} {}  r: replay  e: export",
            self.player.cursor(),
            self.player.fixture_len(),
            state
        )
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.subtitle(), area, ctx);
        let displayed = self.player.displayed();
        let range = self.player.viewport().visible(displayed.len());

        let mut lines: Vec<Line> = displayed[range]
            .iter()
            .map(|e| entry_line(e, ctx.base()))
            .collect();
        if shows_cursor(self.player) {
            lines.push(Line::from(Span::styled(
                "_",
                ctx.base().fg(Color::Green).add_modifier(Modifier::SLOW_BLINK),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/views/logs_tests.rs"]
mod tests;
