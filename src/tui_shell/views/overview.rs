use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Cell, Gauge, Paragraph, Row, Table};

use crate::fixtures::{
    CLUSTER_NODES, Health, PIPELINE_RUNS, RESOURCES, RunStatus, WEEKLY_DEPLOYS,
};

use super::super::{RenderCtx, View, render_view_chrome};

pub(in crate::tui_shell) struct OverviewView;

pub(in crate::tui_shell) fn health_color(health: Health) -> Color {
    match health {
        Health::Good => Color::Green,
        Health::Degraded => Color::Yellow,
        Health::Down => Color::Red,
    }
}

pub(in crate::tui_shell) fn run_color(status: RunStatus) -> Color {
    match status {
        RunStatus::Success | RunStatus::Active => Color::Green,
        RunStatus::Failed => Color::Red,
        RunStatus::Building => Color::Yellow,
    }
}

fn usage_color(percent: u16) -> Color {
    match percent {
        80.. => Color::Red,
        60..=79 => Color::Yellow,
        _ => Color::Cyan,
    }
}

impl View for OverviewView {
    fn title(&self) -> &str {
        "Dashboard"
    }

    fn subtitle(&self) -> String {
        "d: deploy".to_string()
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.subtitle(), area, ctx);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(inner);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        render_weekly(frame, top[0], ctx);
        render_nodes(frame, top[1], ctx);
        render_pipeline(frame, bottom[0], ctx);
        render_resources(frame, bottom[1], ctx);
    }
}

fn render_weekly(frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
    let w = &WEEKLY_DEPLOYS;
    let title = Line::from(vec![
        Span::styled(format!("Total Deployments {} ", w.total), ctx.base().fg(Color::White)),
        Span::styled(w.change, ctx.base().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(w.success_rate, ctx.base().fg(Color::Gray)),
    ]);
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&w.per_day[..])
        .bar_width(4)
        .bar_gap(1)
        .bar_style(ctx.base().fg(Color::Blue))
        .value_style(ctx.base().fg(Color::Black).bg(Color::Blue));
    frame.render_widget(chart, area);
}

fn render_nodes(frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
    let lines: Vec<Line> = CLUSTER_NODES
        .iter()
        .map(|n| {
            Line::from(vec![
                Span::styled("● ", ctx.base().fg(health_color(n.health))),
                Span::styled(format!("{:<18}", n.name), ctx.base()),
                Span::styled(format!("{:<12}", n.zone), ctx.base().fg(Color::Gray)),
                Span::styled(n.status, ctx.base().fg(health_color(n.health))),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Cluster Status")),
        area,
    );
}

fn render_pipeline(frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
    let header = Row::new(["Commit", "Message", "Triggered By", "Duration", "Status"])
        .style(ctx.base().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows = PIPELINE_RUNS.iter().map(|r| {
        Row::new(vec![
            Cell::from(r.commit).style(ctx.base().fg(Color::Cyan)),
            Cell::from(r.message),
            Cell::from(r.triggered_by),
            Cell::from(r.duration),
            Cell::from(r.status.label()).style(ctx.base().fg(run_color(r.status))),
        ])
        .style(ctx.base())
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Pipeline Runs"));
    frame.render_widget(table, area);
}

fn render_resources(frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
    let block = Block::default().borders(Borders::ALL).title("Resource Usage");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(RESOURCES.iter().map(|_| Constraint::Length(2)))
        .split(inner);
    for (res, slot) in RESOURCES.iter().zip(slots.iter()) {
        let gauge = Gauge::default()
            .gauge_style(ctx.base().fg(usage_color(res.percent)))
            .label(format!("{} {}%", res.label, res.percent))
            .percent(res.percent.min(100));
        frame.render_widget(gauge, *slot);
    }
}
