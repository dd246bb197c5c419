use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use prism::deploy::DEFAULT_DOMAIN;
use prism::logging::{self, LogSink};
use prism::session::token::KEY_LEN;

use super::{AppState, router};

#[derive(Parser)]
#[command(name = "prism-server")]
#[command(about = "Prism deploy and login backend (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Shell script run in the background for each deploy
    #[arg(long)]
    script: Option<PathBuf>,

    /// Domain used to build deployment URLs
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: String,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(LogSink::Stderr)?;

    let state = Arc::new(AppState {
        domain: args.domain.clone(),
        script: args.script.clone(),
        token_key: generate_key()?,
    });

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("prism-server listening on {}", local_addr);
    tracing::info!(addr = %local_addr, domain = %args.domain, "server started");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn generate_key() -> Result<[u8; KEY_LEN]> {
    let mut key = [0u8; KEY_LEN];
    getrandom::getrandom(&mut key).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    Ok(key)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
