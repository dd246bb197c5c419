pub mod config;
pub mod deploy;
pub mod engine;
pub mod fixtures;
pub mod logging;
pub mod session;
pub mod tui;

mod tui_shell;
