use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use prism::config::{DeployConfig, PrismConfig};
use prism::deploy::{DeployRequest, DeployTrigger, backend_from_config};
use prism::engine::{DEPLOY_SUCCESS_NOTICE, StreamPlayer, Timers};
use prism::fixtures::LOG_FEED;
use prism::session::{self, Identity, TokenStore};

use crate::Commands;

const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:8000";

pub(crate) fn handle_command(cfg: &PrismConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Tui(_) => anyhow::bail!("`tui` is not a headless command"),

        Commands::Login { url, org } => {
            let base = url
                .or_else(|| cfg.auth_url.clone())
                .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());
            let token = session::login(&base, &org)?;
            let store = TokenStore::in_dir(&cfg.state_dir());
            store.save(&token)?;
            let identity = Identity::from_token(Some(&token));
            println!("Signed in as {}", identity.label());
        }

        Commands::Logout => {
            let store = TokenStore::in_dir(&cfg.state_dir());
            if store.clear()? {
                println!("Signed out");
            } else {
                println!("Not signed in");
            }
        }

        Commands::Whoami { url } => {
            let store = TokenStore::in_dir(&cfg.state_dir());
            match (url, store.load()?) {
                (Some(base), Some(token)) => {
                    let claims = session::fetch_session(&base, &token)?;
                    println!("{}", claims.org_id);
                }
                _ => println!("{}", Identity::load(&store).label()),
            }
        }

        Commands::Deploy {
            repo,
            branch,
            env,
            url,
            json,
        } => {
            let mut request = DeployRequest::for_repo(repo);
            request.branch = branch;
            request.environment = env.into();
            let deploy_cfg = match url {
                Some(base_url) => DeployConfig::Http { base_url },
                None => cfg.deploy.clone(),
            };
            run_deploy(&deploy_cfg, request, json)?;
        }

        Commands::Logs { interval_ms } => {
            let interval = interval_ms.unwrap_or(cfg.stream_interval_ms);
            replay_logs(interval)?;
        }
    }

    Ok(())
}

fn run_deploy(deploy_cfg: &DeployConfig, request: DeployRequest, json: bool) -> Result<()> {
    let mut trigger = DeployTrigger::new(backend_from_config(deploy_cfg)?);
    trigger.submit(request, 0)?;

    let started = Instant::now();
    let (request, outcome) = loop {
        let now = started.elapsed().as_millis() as u64;
        if let Some(done) = trigger.poll(now) {
            break done;
        }
        std::thread::sleep(Duration::from_millis(25));
    };

    let receipt = outcome.with_context(|| {
        format!("deploy {} via {}", request.repo_name, trigger.backend_label())
    })?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&receipt).context("serialize deploy receipt")?
        );
    } else {
        println!("{}", DEPLOY_SUCCESS_NOTICE);
        println!("{}", receipt.summary());
    }
    Ok(())
}

/// Prints the feed one entry per tick, sleeping between ticks on the wall clock.
fn replay_logs(interval: u64) -> Result<()> {
    let mut timers = Timers::new();
    let mut player = StreamPlayer::new(&LOG_FEED, interval);
    player.start(&mut timers);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut printed = 0;
    while !player.is_finished() {
        if interval > 0 {
            std::thread::sleep(Duration::from_millis(interval));
        }
        let until = timers.now().saturating_add(interval.max(1));
        while let Some(fired) = timers.next_due(until) {
            player.tick(&mut timers, fired.handle);
        }
        timers.settle(until);

        for entry in &player.displayed()[printed..] {
            writeln!(out, "{}", entry.render_plain()).context("write log line")?;
        }
        out.flush().context("flush stdout")?;
        printed = player.cursor();
    }
    Ok(())
}
