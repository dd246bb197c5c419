use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
    /// Set while the navigation rail is expanded over the content.
    pub(super) dimmed: bool,
}

impl RenderCtx {
    pub(super) fn base(&self) -> Style {
        if self.dimmed {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        }
    }
}

/// One dashboard panel. Views borrow engine state for a single frame.
pub(super) trait View {
    fn title(&self) -> &str;

    fn subtitle(&self) -> String {
        String::new()
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    subtitle: &str,
    area: Rect,
    ctx: &RenderCtx,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        ctx.base().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if !subtitle.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(subtitle.to_string(), ctx.base().fg(Color::Gray)));
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(ctx.base().fg(Color::DarkGray))
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
