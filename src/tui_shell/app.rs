use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use time::OffsetDateTime;
use time::format_description::FormatItem;

use crate::deploy::{DeployTrigger, Environment, backend_from_config};
use crate::engine::{Dashboard, DashboardSettings, MemoryLocation};
use crate::session::{Identity, TokenStore};
use crate::tui::TuiRunOptions;

use super::input::Input;

mod event_loop;
mod render;
mod trace;

use self::trace::SessionTrace;

pub(super) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut app = App::load(opts)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    app.shutdown(if res.is_ok() { "quit" } else { "error" });

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    res
}

/// Modal text prompts owned by the shell (the palette lives in the engine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Prompt {
    DeployRepo,
}

pub(super) struct App {
    pub(super) dash: Dashboard,
    pub(super) input: Input,
    pub(super) prompt: Option<Prompt>,
    pub(super) deploy_env: Environment,
    pub(super) state_dir: PathBuf,

    // Last drawn rail rectangle; pointer hit-testing uses it.
    pub(super) rail_area: Rect,
    pub(super) pointer_on_rail: bool,

    trace: Option<SessionTrace>,
    pub(super) quit: bool,
}

impl App {
    fn load(opts: TuiRunOptions) -> Result<Self> {
        let config = opts.config;
        let state_dir = config.state_dir();
        let backend = backend_from_config(&config.deploy)?;
        let identity = Identity::load(&TokenStore::in_dir(&state_dir));
        let location = MemoryLocation::new(opts.view.as_deref().unwrap_or(""));
        let dash = Dashboard::mount(
            DashboardSettings::from(&config),
            location,
            DeployTrigger::new(backend),
            identity,
        );

        let mut app = App {
            dash,
            input: Input::default(),
            prompt: None,
            deploy_env: Environment::default(),
            state_dir,
            rail_area: Rect::default(),
            pointer_on_rail: false,
            trace: None,
            quit: false,
        };
        app.enable_trace(opts.trace);
        Ok(app)
    }

    fn enable_trace(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        match SessionTrace::open(&path) {
            Ok(mut trace) => {
                trace.session_start(&self.dash);
                self.trace = Some(trace);
            }
            Err(err) => {
                self.dash.set_error(format!("session trace disabled: {:#}", err));
            }
        }
    }

    /// Forwards engine events to the trace file.
    pub(super) fn flush_events(&mut self) {
        let events = self.dash.drain_events();
        if let Some(trace) = self.trace.as_mut() {
            for ev in &events {
                trace.engine_event(ev);
            }
        }
    }

    pub(super) fn trace_action(&mut self, action: &str) {
        if let Some(trace) = self.trace.as_mut() {
            trace.user_action(action);
        }
    }

    fn shutdown(&mut self, reason: &str) {
        self.flush_events();
        self.dash.unmount();
        if let Some(trace) = self.trace.as_mut() {
            trace.session_end(reason);
        }
    }

    pub(super) fn exports_dir(&self) -> PathBuf {
        self.state_dir.join("exports")
    }
}

fn clock_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[hour padding:zero]:[minute padding:zero]:[second padding:zero]",
        )
        .unwrap_or_default()
    })
}

/// Header clock source. UTC, since local offsets need the `local-offset` feature.
pub(in crate::tui_shell) fn clock_now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

pub(in crate::tui_shell) fn fmt_clock(now: OffsetDateTime) -> String {
    now.format(clock_format())
        .unwrap_or_else(|_| "--:--:--".to_string())
}

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
