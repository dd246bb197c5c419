use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::write_atomic;

pub mod token;
pub use self::token::{SessionClaims, TokenError};

pub const TOKEN_FILE: &str = "prism_token";
pub const GUEST_LABEL: &str = "guest";

/// File-backed holder for the session token.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn in_dir(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(raw.to_string()))
    }

    pub fn save(&self, token: &str) -> Result<()> {
        write_atomic(&self.path, token.trim().as_bytes())
            .with_context(|| format!("store token at {}", self.path.display()))
    }

    /// Returns whether a token was removed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).with_context(|| format!("remove {}", self.path.display()))?;
        Ok(true)
    }
}

/// Who is signed in, as far as the header display is concerned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    org_id: Option<String>,
}

impl Identity {
    pub fn guest() -> Self {
        Self::default()
    }

    /// Never fails: anything that does not decode is treated as no identity.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::guest();
        };
        match token::decode_claims(token) {
            Ok(claims) => Self {
                org_id: Some(claims.org_id),
            },
            Err(err) => {
                tracing::debug!(error = %err, "ignoring undecodable session token");
                Self::guest()
            }
        }
    }

    pub fn load(store: &TokenStore) -> Self {
        match store.load() {
            Ok(token) => Self::from_token(token.as_deref()),
            Err(err) => {
                tracing::debug!(error = %format!("{:#}", err), "session token unreadable");
                Self::guest()
            }
        }
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    pub fn label(&self) -> &str {
        self.org_id.as_deref().unwrap_or(GUEST_LABEL)
    }
}

fn client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent("prism")
        .build()
        .context("build reqwest client")
}

/// POST /api/login and return the issued token.
pub fn login(base_url: &str, org_id: &str) -> Result<String> {
    if org_id.trim().is_empty() {
        anyhow::bail!("organization id is required");
    }
    let resp = client()?
        .post(format!("{}/api/login", base_url.trim_end_matches('/')))
        .json(&serde_json::json!({ "org_id": org_id }))
        .send()
        .with_context(|| format!("connect to {}", base_url))?;

    if !resp.status().is_success() {
        anyhow::bail!("login rejected ({}): invalid organization id", resp.status());
    }
    let body: serde_json::Value = resp.json().context("parse login response")?;
    body.get("access_token")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .context("login response missing access_token")
}

/// GET /api/session: the claims the server accepts for `token`.
pub fn fetch_session(base_url: &str, token: &str) -> Result<SessionClaims> {
    let resp = client()?
        .get(format!("{}/api/session", base_url.trim_end_matches('/')))
        .bearer_auth(token)
        .send()
        .with_context(|| format!("connect to {}", base_url))?;

    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        anyhow::bail!("session rejected by {}: sign in again", base_url);
    }
    if !resp.status().is_success() {
        anyhow::bail!("session check failed ({})", resp.status());
    }
    resp.json().context("parse session response")
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
