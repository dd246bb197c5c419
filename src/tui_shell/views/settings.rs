use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::engine::DashboardSettings;
use crate::session::Identity;

use super::super::{RenderCtx, View, render_view_chrome};

pub(in crate::tui_shell) struct SettingsView<'a> {
    pub(in crate::tui_shell) identity: &'a Identity,
    pub(in crate::tui_shell) settings: &'a DashboardSettings,
    pub(in crate::tui_shell) backend: &'a str,
}

impl View for SettingsView<'_> {
    fn title(&self) -> &str {
        "Settings"
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), "", area, ctx);
        let row = |k: &str, v: String| {
            Line::from(vec![
                Span::styled(format!("{:<22}", k), ctx.base().fg(Color::Gray)),
                Span::styled(v, ctx.base()),
            ])
        };
        let org = match self.identity.org_id() {
            Some(org) => org.to_string(),
            None => "not signed in (prism login --org <id>)".to_string(),
        };
        let lines = vec![
            row("Organization", org),
            row("Deploy backend", self.backend.to_string()),
            row("Log stream interval", format!("{} ms", self.settings.stream_interval)),
            row("Notice duration", format!("{} ms", self.settings.notice_duration)),
            row("View transition", format!("{} ms", self.settings.transition)),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
