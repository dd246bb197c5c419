use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::engine::disclosure::RAIL_COLLAPSED_WIDTH;
use crate::tui_shell::{
    Prompt, RenderCtx, clock_now, fmt_clock, palette, rail, render_view_chrome, views,
};

use super::App;

const BRAND: &str = "Prism by SRMTECH";

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let body = chunks[1];

    let shift = app.dash.disclosure().content_shift();
    let lead = (RAIL_COLLAPSED_WIDTH + shift.offset).min(body.width);
    let main = Rect {
        x: body.x + lead,
        y: body.y,
        width: body.width.saturating_sub(lead),
        height: body.height,
    };
    let rail_area = Rect {
        width: app.dash.disclosure().rail_width().min(body.width),
        ..body
    };
    app.rail_area = rail_area;

    // Borders take two rows and the cursor marker one more.
    if let Some(player) = app.dash.stream_mut() {
        player.resize_viewport(main.height.saturating_sub(3) as usize);
    }

    let ctx = RenderCtx {
        now: clock_now(),
        dimmed: shift.dimmed,
    };

    draw_header(frame, chunks[0], app, &ctx);

    if app.dash.is_loading() {
        draw_skeleton(frame, main, &ctx);
    } else {
        let view = views::for_panel(&app.dash, app.deploy_env);
        view.render(frame, main, &ctx);
    }

    rail::draw(
        frame,
        rail_area,
        app.dash.disclosure().is_expanded(),
        app.dash.current_view().view(),
    );

    if let Some(msg) = app.dash.notice().message() {
        draw_notice(frame, body, msg);
    }

    draw_footer(frame, chunks[2], app);

    if let Some(prompt) = app.prompt {
        draw_prompt(frame, app, prompt);
    }
    if app.dash.palette().is_open() {
        palette::draw(frame, app.dash.palette());
    }
}

fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &App, ctx: &RenderCtx) {
    let route = app.dash.current_view();
    let label = route.view().map(|v| v.label()).unwrap_or("Not Found");
    let left = Line::from(vec![
        Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::styled(format!("  #{}", route.fragment()), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(left).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );

    let org = app.dash.identity().label();
    let right = Line::from(vec![
        Span::styled(org.to_string(), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(fmt_clock(ctx.now), Style::default().fg(Color::Gray)),
    ]);
    let rect = Rect {
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), rect);
}

fn draw_skeleton(frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
    let inner = render_view_chrome(frame, "Loading", "", area, ctx);
    let bar = Style::default().fg(Color::DarkGray);
    let widths: [f32; 5] = [0.6, 0.9, 0.75, 0.4, 0.8];
    let lines: Vec<Line> = widths
        .iter()
        .flat_map(|w| {
            let n = (inner.width as f32 * w) as usize;
            [Line::from(Span::styled("░".repeat(n), bar)), Line::from("")]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_notice(frame: &mut ratatui::Frame, body: Rect, msg: &str) {
    let width = (msg.chars().count() as u16 + 6).min(body.width);
    let rect = Rect {
        x: body.right().saturating_sub(width + 1),
        y: body.y,
        width,
        height: 3.min(body.height),
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(msg.to_string(), Style::default().fg(Color::White)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        ),
        rect,
    );
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let left = if let Some(err) = app.dash.error() {
        Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red)))
    } else if let Some(status) = app.dash.status() {
        Line::from(Span::styled(status.to_string(), Style::default().fg(Color::White)))
    } else {
        Line::from(Span::styled(
            "1-6 views  [ ] back/forward  x dismiss  q quit",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(left), area);

    let hint = Line::from(vec![
        Span::styled("Quick Menu ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Ctrl K",
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), area);
}

fn draw_prompt(frame: &mut ratatui::Frame, app: &App, prompt: Prompt) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 64).min(area.width);
    let h = 6.min(area.height);
    let box_area = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };
    frame.render_widget(Clear, box_area);

    let title = match prompt {
        Prompt::DeployRepo => "Deploy Infrastructure",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let label = "Git Repository: ";
    let lines = vec![
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::raw(app.input.buf.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Environment:    ", Style::default().fg(Color::Gray)),
            Span::styled(app.deploy_env.label(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter deploy  Tab environment  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
    let x = inner.x + label.len() as u16 + app.input.cursor as u16;
    frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
}
