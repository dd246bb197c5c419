use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::fixtures::{BUCKETS, DATABASE, SERVERS};

use super::super::{RenderCtx, View, render_view_chrome};

pub(in crate::tui_shell) struct InfrastructureView;

impl View for InfrastructureView {
    fn title(&self) -> &str {
        "System Health"
    }

    fn subtitle(&self) -> String {
        "EC2 / S3 / RDS".to_string()
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.subtitle(), area, ctx);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SERVERS.len() as u16 + 2),
                Constraint::Length(BUCKETS.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(inner);

        let servers: Vec<Line> = SERVERS
            .iter()
            .map(|s| {
                let (state, color) = if s.running {
                    ("running", Color::Green)
                } else {
                    ("stopped", Color::Red)
                };
                Line::from(vec![
                    Span::styled(format!("{:<22}", s.name), ctx.base()),
                    Span::styled(format!("{:<11}", s.instance), ctx.base().fg(Color::Gray)),
                    Span::styled(format!("{:<12}", s.ip), ctx.base().fg(Color::Gray)),
                    Span::styled(format!("{:<9}", state), ctx.base().fg(color)),
                    Span::styled(format!("CPU {}%", s.cpu), ctx.base()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(servers)
                .block(Block::default().borders(Borders::ALL).title("EC2 Instances")),
            parts[0],
        );

        let buckets: Vec<Line> = BUCKETS
            .iter()
            .map(|b| {
                Line::from(vec![
                    Span::styled(format!("{:<26}", b.name), ctx.base()),
                    Span::styled(format!("{:<12}", b.region), ctx.base().fg(Color::Gray)),
                    Span::styled(format!("{:<10}", b.size), ctx.base()),
                    Span::styled(format!("{} files", b.files), ctx.base().fg(Color::Gray)),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(buckets)
                .block(Block::default().borders(Borders::ALL).title("S3 Buckets")),
            parts[1],
        );

        let db = &DATABASE;
        let db_lines = vec![
            Line::from(vec![
                Span::styled(db.name, ctx.base().fg(Color::White)),
                Span::raw("  "),
                Span::styled(db.status, ctx.base().fg(Color::Green)),
            ]),
            Line::from(Span::styled(db.engine, ctx.base().fg(Color::Gray))),
            Line::from(vec![
                Span::styled(format!("Uptime {}  ", db.uptime), ctx.base()),
                Span::styled(format!("Connections {}  ", db.connections), ctx.base()),
                Span::styled(format!("IOPS {}", db.iops), ctx.base()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(db_lines).block(Block::default().borders(Borders::ALL).title("RDS")),
            parts[2],
        );
    }
}
