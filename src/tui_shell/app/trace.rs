use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::engine::{Dashboard, DashboardEvent};

use super::now_ts;

#[derive(Debug, Default)]
struct TraceStats {
    route_changes: u64,
    user_actions: u64,
    deploys: u64,
    errors: u64,
}

/// Append-only JSONL record of one dashboard session.
#[derive(Debug)]
pub(super) struct SessionTrace {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
    stats: TraceStats,
    broken: bool,
}

impl SessionTrace {
    pub(super) fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
            stats: TraceStats::default(),
            broken: false,
        })
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }

    // A failed write disables the trace for the rest of the session.
    fn record<T: Serialize>(&mut self, event: &str, payload: T) {
        if self.broken {
            return;
        }
        if let Err(err) = self.write_event(event, payload) {
            tracing::warn!(path = %self.path.display(), error = %err, "session trace disabled");
            self.broken = true;
        }
    }

    pub(super) fn session_start(&mut self, dash: &Dashboard) {
        self.record(
            "session_start",
            json!({
                "view": dash.current_view().fragment(),
                "org": dash.identity().label(),
                "deploy_backend": dash.deploy_backend(),
            }),
        );
    }

    pub(super) fn user_action(&mut self, action: &str) {
        self.stats.user_actions += 1;
        self.record("user_action", json!({ "action": action }));
    }

    pub(super) fn engine_event(&mut self, ev: &DashboardEvent) {
        match ev {
            DashboardEvent::RouteChanged { fragment, known } => {
                self.stats.route_changes += 1;
                self.record(
                    "route_changed",
                    json!({ "fragment": fragment, "known": known }),
                );
            }
            DashboardEvent::PaletteToggled { open } => {
                self.record("palette_toggled", json!({ "open": open }));
            }
            DashboardEvent::StreamFinished { entries } => {
                self.record("stream_finished", json!({ "entries": entries }));
            }
            DashboardEvent::DeploySubmitted { repo } => {
                self.stats.deploys += 1;
                self.record("deploy_submitted", json!({ "repo": repo }));
            }
            DashboardEvent::DeployQueued { repo, url } => {
                self.record("deploy_queued", json!({ "repo": repo, "url": url }));
            }
            DashboardEvent::DeployFailed { repo, error } => {
                self.stats.errors += 1;
                self.record("deploy_failed", json!({ "repo": repo, "error": error }));
            }
            DashboardEvent::NoticeHidden => {
                self.record("notice_hidden", json!({}));
            }
        }
    }

    pub(super) fn session_end(&mut self, reason: &str) {
        let payload = json!({
            "reason": reason,
            "stats": {
                "route_changes": self.stats.route_changes,
                "user_actions": self.stats.user_actions,
                "deploys": self.stats.deploys,
                "errors": self.stats.errors,
            },
            "trace_path": self.path.display().to_string(),
        });
        self.record("session_end", payload);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/trace_tests.rs"]
mod tests;
