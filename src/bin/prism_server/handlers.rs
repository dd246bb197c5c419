use std::path::Path;
use std::process::Command;

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use super::*;

pub(super) async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "Backend is running!"}))
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct DeployBody {
    #[serde(default)]
    repo_name: String,
}

pub(super) async fn deploy(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DeployBody>,
) -> Response {
    let repo = body.repo_name.trim().to_string();
    if repo.is_empty() {
        return bad_request("repo_name is required");
    }

    let probed =
        tokio::task::spawn_blocking(|| (find_free_port(3000), find_free_port(8000))).await;
    let ports = match probed {
        Ok((Some(frontend), Some(backend))) => DeployPorts { frontend, backend },
        Ok(_) => return internal_error(anyhow::anyhow!("no free port to assign")),
        Err(err) => return internal_error(anyhow::Error::new(err).context("probe ports")),
    };

    if let Some(script) = state.script.clone() {
        let repo = repo.clone();
        let _ = tokio::task::spawn_blocking(move || run_deploy_script(&script, &repo, ports));
    }

    tracing::info!(
        repo = %repo,
        frontend = ports.frontend,
        backend = ports.backend,
        "deploy queued"
    );
    Json(DeployReceipt::queued(&repo, ports, &state.domain)).into_response()
}

// Outcome is only logged; the response has already gone out.
fn run_deploy_script(script: &Path, repo: &str, ports: DeployPorts) {
    if !script.exists() {
        tracing::error!(script = %script.display(), "deploy script not found");
        return;
    }
    tracing::info!(repo, script = %script.display(), "running deploy script");
    let out = Command::new("bash")
        .arg(script)
        .arg(repo)
        .arg(ports.frontend.to_string())
        .arg(ports.backend.to_string())
        .output();
    match out {
        Ok(out) if out.status.success() => {
            tracing::info!(
                repo,
                stdout = %String::from_utf8_lossy(&out.stdout),
                "deploy script succeeded"
            );
        }
        Ok(out) => {
            tracing::warn!(
                repo,
                status = %out.status,
                stderr = %String::from_utf8_lossy(&out.stderr),
                "deploy script failed"
            );
        }
        Err(err) => {
            tracing::error!(repo, error = %err, "deploy script did not start");
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginBody {
    #[serde(default)]
    org_id: String,
}

pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> Response {
    let org_id = body.org_id.trim();
    if org_id.is_empty() {
        return bad_request("org_id is required");
    }
    let claims = SessionClaims {
        org_id: org_id.to_string(),
        iat: time::OffsetDateTime::now_utc().unix_timestamp(),
    };
    match token::mint(&claims, &state.token_key) {
        Ok(access_token) => {
            tracing::info!(org = %claims.org_id, "session issued");
            Json(serde_json::json!({"access_token": access_token})).into_response()
        }
        Err(err) => bad_request(&err.to_string()),
    }
}

pub(super) async fn session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let Some(bearer) = bearer else {
        return unauthorized("missing bearer token");
    };
    match token::verify(bearer, &state.token_key) {
        Ok(claims) => Json(claims).into_response(),
        Err(err) => {
            tracing::info!(error = %err, "session rejected");
            unauthorized(&err.to_string())
        }
    }
}
