use ratatui::layout::{Alignment, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::{RenderCtx, View, render_view_chrome};

pub(in crate::tui_shell) struct NotFoundView<'a> {
    pub(in crate::tui_shell) fragment: &'a str,
}

impl View for NotFoundView<'_> {
    fn title(&self) -> &str {
        "Not Found"
    }

    fn subtitle(&self) -> String {
        format!("#{}", self.fragment)
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.subtitle(), area, ctx);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No view named '{}'", self.fragment),
                ctx.base().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Press 1 for the Dashboard or Ctrl+K to search",
                ctx.base().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
