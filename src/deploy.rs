//! Deployment trigger collaborator.
//!
//! The dashboard hands a [`DeployRequest`] to a [`DeployBackend`] and polls for
//! the outcome on its own event loop; backends never call back into the UI.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::DeployConfig;
use crate::engine::timers::Millis;

mod http;
pub use self::http::{HttpBackend, post_deploy};

pub const DEFAULT_DOMAIN: &str = "srm-tech.com";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Qa,
    Prod,
}

impl Environment {
    pub fn label(self) -> &'static str {
        match self {
            Environment::Dev => "Development (dev)",
            Environment::Qa => "QA / Testing",
            Environment::Prod => "Production",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub repo_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_true")]
    pub ssl: bool,
    #[serde(default = "default_true")]
    pub route53: bool,
    #[serde(default = "default_true")]
    pub s3_assets: bool,
    #[serde(default = "default_true")]
    pub iac_git: bool,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

impl DeployRequest {
    pub fn for_repo(repo_name: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            project_name: String::new(),
            environment: Environment::default(),
            branch: default_branch(),
            ssl: true,
            route53: true,
            s3_assets: true,
            iac_git: true,
        }
    }

    pub fn validate(&self) -> Result<(), DeployError> {
        if self.repo_name.trim().is_empty() {
            return Err(DeployError::MissingRepository);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployPorts {
    pub frontend: u16,
    pub backend: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployReceipt {
    pub status: String,
    pub message: String,
    pub ports: DeployPorts,
    pub url: String,
}

impl DeployReceipt {
    pub fn queued(repo_name: &str, ports: DeployPorts, domain: &str) -> Self {
        Self {
            status: "queued".to_string(),
            message: format!("Deployment started for {}", repo_name),
            ports,
            url: format!("https://{}.{}", repo_name, domain),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} (FE port {}, BE port {}) {}",
            self.message, self.ports.frontend, self.ports.backend, self.url
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    #[error("Please enter a Git Repository name")]
    MissingRepository,
    #[error("a deployment is already in progress")]
    InFlight,
    #[error("server error: {0}")]
    Rejected(String),
    #[error("could not reach deploy backend: {0}")]
    Unreachable(String),
    #[error("deploy worker stopped without a result")]
    WorkerLost,
}

pub trait DeployBackend {
    fn label(&self) -> &str;

    /// Starts a deployment. Only one request is in flight at a time.
    fn dispatch(&mut self, request: &DeployRequest, now: Millis) -> Result<(), DeployError>;

    /// Returns the outcome once it is available.
    fn poll(&mut self, now: Millis) -> Option<Result<DeployReceipt, DeployError>>;
}

/// Pretends to deploy: succeeds after a fixed delay on the engine clock.
#[derive(Debug)]
pub struct SimulatedBackend {
    delay: Millis,
    domain: String,
    pending: Option<(Millis, String)>,
}

impl SimulatedBackend {
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            domain: DEFAULT_DOMAIN.to_string(),
            pending: None,
        }
    }
}

impl DeployBackend for SimulatedBackend {
    fn label(&self) -> &str {
        "simulated"
    }

    fn dispatch(&mut self, request: &DeployRequest, now: Millis) -> Result<(), DeployError> {
        self.pending = Some((now.saturating_add(self.delay), request.repo_name.clone()));
        Ok(())
    }

    fn poll(&mut self, now: Millis) -> Option<Result<DeployReceipt, DeployError>> {
        let (due, _) = self.pending.as_ref()?;
        if now < *due {
            return None;
        }
        let (_, repo) = self.pending.take()?;
        let ports = DeployPorts {
            frontend: 3000,
            backend: 8000,
        };
        Some(Ok(DeployReceipt::queued(&repo, ports, &self.domain)))
    }
}

/// Validates requests and keeps at most one in flight.
pub struct DeployTrigger {
    backend: Box<dyn DeployBackend>,
    in_flight: Option<DeployRequest>,
}

impl std::fmt::Debug for DeployTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployTrigger")
            .field("backend", &self.backend.label())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl DeployTrigger {
    pub fn new(backend: Box<dyn DeployBackend>) -> Self {
        Self {
            backend,
            in_flight: None,
        }
    }

    pub fn backend_label(&self) -> &str {
        self.backend.label()
    }

    pub fn in_flight(&self) -> Option<&DeployRequest> {
        self.in_flight.as_ref()
    }

    pub fn submit(&mut self, request: DeployRequest, now: Millis) -> Result<(), DeployError> {
        request.validate()?;
        if self.in_flight.is_some() {
            return Err(DeployError::InFlight);
        }
        self.backend.dispatch(&request, now)?;
        tracing::info!(
            repo = %request.repo_name,
            backend = self.backend.label(),
            "deploy submitted"
        );
        self.in_flight = Some(request);
        Ok(())
    }

    pub fn poll(
        &mut self,
        now: Millis,
    ) -> Option<(DeployRequest, Result<DeployReceipt, DeployError>)> {
        if self.in_flight.is_none() {
            return None;
        }
        let outcome = self.backend.poll(now)?;
        let request = self.in_flight.take()?;
        match &outcome {
            Ok(r) => tracing::info!(repo = %request.repo_name, url = %r.url, "deploy queued"),
            Err(err) => tracing::warn!(repo = %request.repo_name, error = %err, "deploy failed"),
        }
        Some((request, outcome))
    }
}

pub fn backend_from_config(cfg: &DeployConfig) -> Result<Box<dyn DeployBackend>> {
    Ok(match cfg {
        DeployConfig::Simulated { delay_ms } => Box::new(SimulatedBackend::new(*delay_ms)),
        DeployConfig::Http { base_url } => Box::new(HttpBackend::new(base_url)?),
    })
}

#[cfg(test)]
#[path = "tests/deploy_tests.rs"]
mod tests;
