use anyhow::Result;

mod app;
mod input;
mod palette;
mod rail;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{Prompt, clock_now, fmt_clock};
use view::{RenderCtx, View, render_view_chrome};

pub(crate) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
