use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::deploy::{DEFAULT_DOMAIN, DeployRequest, Environment};
use crate::fixtures::DEPLOYMENT_HISTORY;

use super::super::{RenderCtx, View, render_view_chrome};
use super::overview::run_color;

pub(in crate::tui_shell) struct DeploymentsView<'a> {
    pub(in crate::tui_shell) in_flight: Option<&'a DeployRequest>,
    pub(in crate::tui_shell) backend: &'a str,
    pub(in crate::tui_shell) environment: Environment,
}

impl View for DeploymentsView<'_> {
    fn title(&self) -> &str {
        "New Deployment"
    }

    fn subtitle(&self) -> String {
        format!("backend: {}", self.backend)
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.subtitle(), area, ctx);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(inner);

        let label =
            |s: &'static str| Span::styled(format!("{:<14}", s), ctx.base().fg(Color::Gray));
        let mut lines = vec![
            Line::from(vec![
                label("Source"),
                Span::styled("GitHub repository (press d to enter a name)", ctx.base()),
            ]),
            Line::from(vec![
                label("Environment"),
                Span::styled(self.environment.label(), ctx.base().fg(Color::Cyan)),
                Span::styled("  (Tab cycles while typing)", ctx.base().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                label("Domain"),
                Span::styled(format!("<repo>.{}", DEFAULT_DOMAIN), ctx.base()),
            ]),
            Line::from(vec![
                label("Add-ons"),
                Span::styled("SSL, Route53 DNS, S3 assets, IaC Git", ctx.base()),
            ]),
            Line::from(""),
        ];
        match self.in_flight {
            Some(req) => lines.push(Line::from(Span::styled(
                format!("Deploying {} to {}...", req.repo_name, req.environment.label()),
                ctx.base().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Ready. d: Deploy Infrastructure",
                ctx.base().fg(Color::Green),
            ))),
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Configure")),
            parts[0],
        );

        let header = Row::new(["Project", "Branch", "Commit", "Environment", "Time", "Status"])
            .style(ctx.base().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let rows = DEPLOYMENT_HISTORY.iter().map(|d| {
            Row::new(vec![
                Cell::from(d.project),
                Cell::from(d.branch),
                Cell::from(d.commit).style(ctx.base().fg(Color::Cyan)),
                Cell::from(d.environment),
                Cell::from(d.time),
                Cell::from(d.status.label()).style(ctx.base().fg(run_color(d.status))),
            ])
            .style(ctx.base())
        });
        let table = Table::new(
            rows,
            [
                Constraint::Min(16),
                Constraint::Length(14),
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(14),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Deployment History"));
        frame.render_widget(table, parts[1]);
    }
}
