use std::path::PathBuf;

use clap::{Args, Subcommand};

use prism::deploy::Environment;

mod cli_exec;
mod cli_runtime;

#[derive(Args, Clone, Debug, Default)]
pub(crate) struct TuiArgs {
    /// Initial view fragment (e.g. `logs`, `#kanban`)
    #[arg(long, value_name = "FRAGMENT")]
    view: Option<String>,

    /// Append a JSONL session trace to PATH
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Open the terminal dashboard (default)
    Tui(TuiArgs),

    /// Sign in to an organization and store the session token
    Login {
        /// Auth server base URL (defaults to `auth_url` from config)
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        org: String,
    },

    /// Forget the stored session token
    Logout,

    /// Print the signed-in organization
    Whoami {
        /// Check the stored token against this auth server
        #[arg(long)]
        url: Option<String>,
    },

    /// Trigger a deployment without opening the dashboard
    Deploy {
        /// Git repository name
        #[arg(long)]
        repo: String,
        #[arg(long, default_value = "main")]
        branch: String,
        #[arg(long, value_enum, default_value_t = EnvArg::Dev)]
        env: EnvArg,
        /// Deploy server base URL; overrides the configured backend
        #[arg(long)]
        url: Option<String>,
        /// Emit the receipt as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay the server log feed to stdout
    Logs {
        /// Delay between entries (defaults to `stream_interval_ms`)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EnvArg {
    Dev,
    Qa,
    Prod,
}

impl From<EnvArg> for Environment {
    fn from(v: EnvArg) -> Self {
        match v {
            EnvArg::Dev => Environment::Dev,
            EnvArg::Qa => Environment::Qa,
            EnvArg::Prod => Environment::Prod,
        }
    }
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
