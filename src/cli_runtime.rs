use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use prism::config::PrismConfig;
use prism::logging::{self, LogSink};

use crate::{Commands, TuiArgs};

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Prism admin dashboard", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to <state dir>/config.json when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    tui: TuiArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = PrismConfig::load(cli.config.as_deref())?;

    match cli.command {
        None => run_tui(cfg, cli.tui),
        Some(Commands::Tui(args)) => {
            if cli.tui.view.is_some() || cli.tui.trace.is_some() {
                anyhow::bail!("pass `--view`/`--trace` after `tui`, not before it");
            }
            run_tui(cfg, args)
        }
        Some(command) => {
            if cli.tui.view.is_some() || cli.tui.trace.is_some() {
                anyhow::bail!("`--view` and `--trace` are only supported when running the TUI");
            }
            logging::init(LogSink::Stderr)?;
            crate::cli_exec::handle_command(&cfg, command)
        }
    }
}

fn run_tui(cfg: PrismConfig, args: TuiArgs) -> Result<()> {
    // The terminal belongs to the UI; logs go to a file.
    logging::init(LogSink::in_state_dir(&cfg.state_dir()))?;
    tracing::info!(view = ?args.view, "starting dashboard");
    prism::tui::run_with_options(prism::tui::TuiRunOptions {
        view: args.view,
        trace: args.trace,
        config: cfg,
    })
}
