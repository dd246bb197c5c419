use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";
pub const STATE_DIR_ENV: &str = "PRISM_STATE_DIR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DeployConfig {
    Simulated {
        #[serde(default = "default_deploy_delay")]
        delay_ms: u64,
    },
    Http {
        base_url: String,
    },
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig::Simulated {
            delay_ms: default_deploy_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismConfig {
    /// Cadence of the simulated log feed.
    #[serde(default = "default_stream_interval")]
    pub stream_interval_ms: u64,

    /// How long the success notice stays up.
    #[serde(default = "default_notice_duration")]
    pub notice_duration_ms: u64,

    /// Loading window shown after each navigation. 0 disables it.
    #[serde(default = "default_transition")]
    pub transition_ms: u64,

    #[serde(default)]
    pub deploy: DeployConfig,

    /// Backend used by `prism login`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

fn default_stream_interval() -> u64 {
    800
}

fn default_notice_duration() -> u64 {
    4000
}

fn default_transition() -> u64 {
    800
}

fn default_deploy_delay() -> u64 {
    1500
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            stream_interval_ms: default_stream_interval(),
            notice_duration_ms: default_notice_duration(),
            transition_ms: default_transition(),
            deploy: DeployConfig::default(),
            auth_url: None,
            state_dir: None,
        }
    }
}

impl PrismConfig {
    /// Reads `path` if given (it must exist), otherwise `<state dir>/config.json`
    /// when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }
        let implicit = default_state_dir().join(CONFIG_FILE);
        if !implicit.exists() {
            return Ok(Self::default());
        }
        Self::read(&implicit)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: PrismConfig =
            serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self).context("serialize config")?;
        write_atomic(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(default_state_dir)
    }
}

pub fn default_state_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(STATE_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(xdg) = std::env::var_os("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("prism");
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local/state/prism");
    }
    PathBuf::from(".prism")
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
