use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::fixtures::{SPRINT_TITLE, TASK_BOARD, TaskColumn};

use super::super::{RenderCtx, View, render_view_chrome};

pub(in crate::tui_shell) struct KanbanView;

impl View for KanbanView {
    fn title(&self) -> &str {
        "Task Board"
    }

    fn subtitle(&self) -> String {
        SPRINT_TITLE.to_string()
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.subtitle(), area, ctx);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(TASK_BOARD.iter().map(|_| Constraint::Ratio(1, TASK_BOARD.len() as u32)))
            .split(inner);
        for (column, slot) in TASK_BOARD.iter().zip(cols.iter()) {
            render_column(frame, column, *slot, ctx);
        }
    }
}

fn render_column(frame: &mut ratatui::Frame, column: &TaskColumn, area: Rect, ctx: &RenderCtx) {
    let mut lines = Vec::new();
    for card in column.cards {
        let mut head = vec![
            Span::styled(card.title, ctx.base().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(format!("[{}]", card.tag), ctx.base().fg(Color::Cyan)),
        ];
        if let Some(who) = card.assignee {
            head.push(Span::styled(format!(" @{}", who), ctx.base().fg(Color::Gray)));
        }
        lines.push(Line::from(head));
        if let Some(desc) = card.description {
            lines.push(Line::from(Span::styled(desc, ctx.base().fg(Color::Gray))));
        }
        lines.push(Line::from(""));
    }
    let title = format!("{} ({})", column.title, column.count);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}
