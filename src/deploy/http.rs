use std::sync::mpsc::{self, Receiver, TryRecvError};

use anyhow::{Context, Result};

use super::{DeployBackend, DeployError, DeployReceipt, DeployRequest};
use crate::engine::timers::Millis;

/// Posts to `{base_url}/deploy` on a worker thread; the outcome comes back over
/// a channel drained by `poll`.
#[derive(Debug)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    rx: Option<Receiver<Result<DeployReceipt, DeployError>>>,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("prism")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            rx: None,
        })
    }
}

impl DeployBackend for HttpBackend {
    fn label(&self) -> &str {
        "http"
    }

    fn dispatch(&mut self, request: &DeployRequest, _now: Millis) -> Result<(), DeployError> {
        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let request = request.clone();
        std::thread::Builder::new()
            .name("prism-deploy".to_string())
            .spawn(move || {
                let _ = tx.send(post_deploy(&client, &base_url, &request));
            })
            .map_err(|err| DeployError::Unreachable(err.to_string()))?;
        self.rx = Some(rx);
        Ok(())
    }

    fn poll(&mut self, _now: Millis) -> Option<Result<DeployReceipt, DeployError>> {
        let rx = self.rx.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(DeployError::WorkerLost),
        };
        self.rx = None;
        Some(outcome)
    }
}

/// Blocking POST /deploy.
pub fn post_deploy(
    client: &reqwest::blocking::Client,
    base_url: &str,
    request: &DeployRequest,
) -> Result<DeployReceipt, DeployError> {
    let resp = client
        .post(format!("{}/deploy", base_url.trim_end_matches('/')))
        .json(request)
        .send()
        .map_err(|err| DeployError::Unreachable(format!("{} ({})", base_url, err)))?;

    let status = resp.status();
    let body: serde_json::Value = resp.json().unwrap_or(serde_json::Value::Null);
    if !status.is_success() {
        return Err(DeployError::Rejected(error_detail(&body)));
    }
    serde_json::from_value(body)
        .map_err(|err| DeployError::Rejected(format!("bad response: {}", err)))
}

pub(crate) fn error_detail(body: &serde_json::Value) -> String {
    body.get("detail")
        .or_else(|| body.get("error"))
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error")
        .to_string()
}
