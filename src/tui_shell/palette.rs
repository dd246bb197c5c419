use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::engine::CommandFilter;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4)).max(20).min(area.width);
    let h = height.min(area.height.saturating_sub(2)).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 3,
        width: w,
        height: h,
    }
}

/// The Ctrl+K overlay: query line on top, results below.
pub(super) fn draw(frame: &mut ratatui::Frame, palette: &CommandFilter) {
    let results = palette.results();
    let body_rows = results.len().max(2) as u16;
    let box_area = centered(frame.area(), 60, body_rows + 5);
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled("Quick Menu", Style::default().fg(Color::Cyan)),
            Span::styled("  Esc to close", Style::default().fg(Color::DarkGray)),
        ]));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let query = palette.query();
    let query_line = if query.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "Type a command or search...",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(query.to_string()),
        ])
    };
    frame.render_widget(
        Paragraph::new(query_line).block(Block::default().borders(Borders::BOTTOM)),
        parts[0],
    );
    let cursor_x = parts[0].x + 2 + query.chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(parts[0].right().saturating_sub(1)), parts[0].y));

    if results.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                format!("No results for \"{}\"", query),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Try searching for 'Deploy' or 'Logs'",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), parts[1]);
        return;
    }

    let selected = palette.selected().min(results.len() - 1);
    let lines: Vec<Line> = results
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", entry.icon.glyph()), style),
                Span::styled(format!("{:<24}", entry.label), style),
                Span::styled(entry.href(), style.fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), parts[1]);
}
