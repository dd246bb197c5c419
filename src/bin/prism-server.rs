use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use prism::deploy::{DeployPorts, DeployReceipt};
use prism::session::token::{self, KEY_LEN, SessionClaims};

#[path = "prism_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "prism_server/ports.rs"]
mod ports;
use self::ports::*;
#[path = "prism_server/handlers.rs"]
mod handlers;
use self::handlers::*;
#[path = "prism_server/runtime.rs"]
mod runtime;

#[derive(Clone)]
struct AppState {
    domain: String,

    // Deploy hook run as `bash <script> <repo> <frontend port> <backend port>`.
    script: Option<PathBuf>,

    // Per-process signing key for session tokens.
    token_key: [u8; KEY_LEN],
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/deploy", post(deploy))
        .route("/api/login", post(login))
        .route("/api/session", get(session))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
