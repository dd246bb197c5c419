use std::path::PathBuf;

use anyhow::Result;

use crate::config::PrismConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Initial fragment, e.g. `logs` or `#kanban`.
    pub view: Option<String>,
    pub trace: Option<PathBuf>,
    pub config: PrismConfig,
}

pub fn run() -> Result<()> {
    crate::tui_shell::run(TuiRunOptions::default())
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
