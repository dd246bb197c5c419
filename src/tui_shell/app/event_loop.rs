use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;

use super::App;
use crate::tui_shell::rail;

mod key_dispatch;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        // Feed whole elapsed milliseconds into the logical clock and keep the
        // remainder for the next pass.
        let elapsed = last_tick.elapsed().as_millis() as u64;
        if elapsed > 0 {
            last_tick += Duration::from_millis(elapsed);
            app.dash.advance(elapsed);
        }
        app.flush_events();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    key_dispatch::handle_key(app, k)
                }
                Event::Mouse(m) => handle_mouse(app, m),
                _ => {}
            }
        }
    }
}

fn handle_mouse(app: &mut App, ev: MouseEvent) {
    let pos = Position::new(ev.column, ev.row);
    let on_rail = app.rail_area.contains(pos);

    if on_rail != app.pointer_on_rail {
        app.pointer_on_rail = on_rail;
        if on_rail {
            app.dash.disclosure_mut().pointer_enter();
        } else {
            app.dash.disclosure_mut().pointer_leave();
        }
    }

    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) if on_rail => {
            if let Some(view) = rail::item_at(app.rail_area, ev.row) {
                app.trace_action(&format!("rail_click:{}", view.fragment()));
                app.dash.navigate(view);
            }
        }
        MouseEventKind::ScrollUp => {
            if let Some(player) = app.dash.stream_mut() {
                player.scroll_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if let Some(player) = app.dash.stream_mut() {
                player.scroll_down();
            }
        }
        _ => {}
    }
}
